//! Reference dollars-per-square-foot rates for the Dallas-Fort Worth service area.

pub(super) const ZIP_RATES: &[(&str, f64)] = &[
    // Dallas core
    ("75201", 350.0),
    ("75202", 325.0),
    ("75204", 310.0),
    ("75205", 425.0),
    ("75206", 295.0),
    ("75209", 340.0),
    ("75214", 285.0),
    ("75219", 330.0),
    ("75225", 390.0),
    ("75230", 300.0),
    // South and east Dallas
    ("75203", 175.0),
    ("75208", 210.0),
    ("75215", 150.0),
    ("75216", 140.0),
    ("75217", 145.0),
    ("75227", 165.0),
    ("75228", 180.0),
    // Suburbs
    ("75024", 265.0),
    ("75034", 255.0),
    ("75070", 215.0),
    ("75080", 225.0),
    ("75098", 190.0),
    ("75149", 160.0),
    ("75150", 170.0),
    // Fort Worth
    ("76102", 275.0),
    ("76104", 165.0),
    ("76107", 260.0),
    ("76109", 245.0),
    ("76116", 195.0),
    ("76133", 170.0),
];
