//! Unit tests for wr-io.

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use wr_core::{CoreError, Weather, WeatherCosts};
    use wr_graph::WeatherGraph;

    use crate::{LoadSummary, RouteIoError, load_routes_path, load_routes_reader, parse_routes};

    const ROUTES: &str = "\
A B 10 15 20 25
B C 10 15 20 25
A C 30 35 40 45
";

    #[test]
    fn loads_triangle() {
        let mut g = WeatherGraph::new();
        let summary = load_routes_reader(Cursor::new(ROUTES), &mut g).unwrap();
        assert_eq!(summary, LoadSummary { records: 3, cities_added: 3 });
        assert_eq!(g.city_names().collect::<Vec<_>>(), ["A", "B", "C"]);
        assert_eq!(g.shortest_path("A", "C").unwrap(), ["A", "B", "C"]);
        assert_eq!(g.path_cost("A", "C").unwrap(), Some(20));
        g.set_weather(Weather::Rain);
        assert_eq!(g.path_cost("A", "C").unwrap(), Some(30));
    }

    #[test]
    fn later_lines_update_earlier_edges() {
        let routes = "A B 10 15 20 25\nA B 1 2 3 4\n";
        let mut g = WeatherGraph::new();
        load_routes_reader(Cursor::new(routes), &mut g).unwrap();
        assert_eq!(g.edge_costs("A", "B").unwrap(), Some(WeatherCosts::new([1, 2, 3, 4])));
    }

    #[test]
    fn load_into_existing_graph_counts_only_new_cities() {
        let mut g = WeatherGraph::new();
        g.add_city("A");
        let summary = load_routes_reader(Cursor::new("A Z 1 1 1 1\n"), &mut g).unwrap();
        assert_eq!(summary, LoadSummary { records: 1, cities_added: 1 });
    }

    #[test]
    fn blank_lines_skipped() {
        let edges = parse_routes(Cursor::new("\nA B 1 2 3 4\n\nB C 5 6 7 8\n")).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[1].origin, "B");
        assert_eq!(edges[1].costs, WeatherCosts::new([5, 6, 7, 8]));
    }

    #[test]
    fn trailing_space_tolerated() {
        let edges = parse_routes(Cursor::new("A B 1 2 3 4 \nB C 5 6 7 8  \n")).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].destination, "B");
        assert_eq!(edges[0].costs, WeatherCosts::new([1, 2, 3, 4]));
    }

    #[test]
    fn repeated_spaces_tolerated() {
        let edges = parse_routes(Cursor::new("A  B 1   2 3 4\n  C D 5 6 7 8\n")).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].origin.as_str(), edges[0].destination.as_str()), ("A", "B"));
        assert_eq!(edges[0].costs, WeatherCosts::new([1, 2, 3, 4]));
        assert_eq!(edges[1].origin, "C");
    }

    #[test]
    fn whitespace_only_line_skipped() {
        let edges = parse_routes(Cursor::new("A B 1 2 3 4\n   \nB C 5 6 7 8\n")).unwrap();
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn quotes_are_part_of_city_names() {
        // An unmatched quote does not swallow the rest of the line.
        let edges = parse_routes(Cursor::new("\"San Jose 1 2 3 4\nB C 5 6 7 8\n")).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].origin, "\"San");
        assert_eq!(edges[0].destination, "Jose");

        let edges = parse_routes(Cursor::new("\"Lima Quito\" 1 2 3 4\n")).unwrap();
        assert_eq!(edges[0].origin, "\"Lima");
        assert_eq!(edges[0].destination, "Quito\"");
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let err = parse_routes(Cursor::new("A B 1 2 3 4\nB C 1 2 3\n")).unwrap_err();
        match err {
            RouteIoError::Malformed { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("expected 6 fields"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_integer_cost_is_malformed() {
        let err = parse_routes(Cursor::new("A B 1 two 3 4\n")).unwrap_err();
        assert!(matches!(err, RouteIoError::Malformed { line: 1, .. }), "{err}");
    }

    #[test]
    fn negative_cost_is_invalid_weight() {
        let err = parse_routes(Cursor::new("A B 1 2 -3 4\n")).unwrap_err();
        assert!(matches!(
            err,
            RouteIoError::InvalidWeight {
                line: 1,
                source: CoreError::InvalidWeight { weather: Weather::Snow, cost: -3 },
            }
        ));
    }

    #[test]
    fn bad_file_leaves_graph_untouched() {
        let mut g = WeatherGraph::new();
        let result = load_routes_reader(Cursor::new("A B 1 2 3 4\nC D x 2 3 4\n"), &mut g);
        assert!(result.is_err());
        assert_eq!(g.city_count(), 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut g = WeatherGraph::new();
        let err = load_routes_path(&dir.path().join("absent.txt"), &mut g).unwrap_err();
        assert!(matches!(err, RouteIoError::Io(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("routes.txt");
        std::fs::write(&path, ROUTES).unwrap();

        let mut g = WeatherGraph::new();
        load_routes_path(&path, &mut g).unwrap();
        assert_eq!(g.graph_center().unwrap(), "A");
    }
}

#[cfg(test)]
mod table_tests {
    use std::io::Cursor;

    use wr_graph::WeatherGraph;

    use crate::{load_routes_reader, write_distance_table, write_distance_table_path};

    fn triangle() -> WeatherGraph {
        let mut g = WeatherGraph::new();
        load_routes_reader(
            Cursor::new("A B 10 15 20 25\nB C 10 15 20 25\nA C 30 35 40 45\n"),
            &mut g,
        )
        .unwrap();
        g
    }

    fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes)
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect()
    }

    #[test]
    fn csv_layout() {
        let mut buf = Vec::new();
        write_distance_table(&triangle().distance_table(), &mut buf).unwrap();

        let rows = read_rows(&buf);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], ["", "A", "B", "C"]);
        assert_eq!(rows[1], ["A", "0", "10", "20"]);
        assert_eq!(rows[2], ["B", "inf", "0", "10"]);
        assert_eq!(rows[3], ["C", "inf", "inf", "0"]);
    }

    #[test]
    fn csv_written_to_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("distances.csv");
        write_distance_table_path(&triangle().distance_table(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let rows = read_rows(&bytes);
        assert_eq!(rows[1][2], "10");
    }

    #[test]
    fn empty_table_writes_corner_only() {
        let mut buf = Vec::new();
        write_distance_table(&WeatherGraph::new().distance_table(), &mut buf).unwrap();
        let rows = read_rows(&buf);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], [""]);
    }
}
