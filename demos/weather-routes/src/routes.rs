//! Built-in route data used when no route file is given.
//!
//! Five cities on a loose ring with one shortcut.  Mountain legs get much
//! slower in snow and storms; the coastal legs degrade gently.

/// `<origin> <destination> <normal> <rain> <snow> <storm>` per line.
pub const SAMPLE_ROUTES: &str = "\
Guatemala Antigua 45 60 90 120
Antigua Guatemala 45 60 90 120
Antigua Quetzaltenango 180 220 400 600
Quetzaltenango Antigua 180 220 400 600
Guatemala Escuintla 60 70 80 95
Escuintla Guatemala 60 70 80 95
Escuintla Quetzaltenango 200 230 260 300
Quetzaltenango Escuintla 200 230 260 300
Guatemala Coban 210 260 380 500
Coban Guatemala 210 260 380 500
";

/// City pair queried in every weather.
pub const QUERY: (&str, &str) = ("Guatemala", "Quetzaltenango");
