//! Column layout of the timesheet sheet.
//!
//! Every tracked field has exactly one fixed column letter; the driver code
//! column itself is part of `SheetLayout`. This table MUST match the column
//! order of the shared spreadsheet — if the sheet schema changes, these
//! constants must be updated with it.

/// One tracked field: wire name, target column, and whether its value goes
/// through the zone translation table before being written.
#[derive(Debug)]
pub struct FieldColumn {
    pub name: &'static str,
    pub column: &'static str,
    pub translated: bool,
}

/// Field-to-column mapping in sheet order. Static configuration, never
/// derived at runtime.
pub const FIELD_COLUMNS: &[FieldColumn] = &[
    FieldColumn { name: "startingKm", column: "B", translated: false },
    FieldColumn { name: "endingKm", column: "C", translated: false },
    FieldColumn { name: "shiftStart", column: "D", translated: false },
    FieldColumn { name: "loadOut", column: "E", translated: false },
    FieldColumn { name: "firstStop", column: "F", translated: false },
    FieldColumn { name: "lastStop", column: "G", translated: false },
    FieldColumn { name: "lastReattempt", column: "H", translated: false },
    FieldColumn { name: "stationReturn", column: "I", translated: false },
    FieldColumn { name: "clockOut", column: "J", translated: false },
    FieldColumn { name: "zone", column: "K", translated: true },
    FieldColumn { name: "uta", column: "L", translated: false },
    FieldColumn { name: "utl", column: "M", translated: false },
    FieldColumn { name: "nsl", column: "N", translated: false },
    FieldColumn { name: "bc", column: "O", translated: false },
    FieldColumn { name: "rejDmg", column: "P", translated: false },
    FieldColumn { name: "oodt", column: "Q", translated: false },
    FieldColumn { name: "fdd", column: "R", translated: false },
    FieldColumn { name: "extra", column: "S", translated: false },
];

/// Translate a zone name to its single-letter sheet code. The zone set is
/// closed; unknown names return `None` and callers store the raw value
/// unchanged (fail-open).
pub fn zone_code(zone: &str) -> Option<&'static str> {
    match zone {
        "Campbell River" => Some("a"),
        "Black Creek" => Some("b"),
        "Comox" => Some("c"),
        "Courtenay" => Some("d"),
        "Cumberland" => Some("e"),
        "Royston/Union Bay" => Some("f"),
        "Fanny Bay/Bowser" => Some("g"),
        "Port Alberni" => Some("h"),
        "Qualicum Beach" => Some("i"),
        "Errington" => Some("j"),
        "Parksville" => Some("k"),
        "Nanoose Bay" => Some("l"),
        "Lantzville" => Some("m"),
        "Nanaimo" => Some("n"),
        "Cedar" => Some("o"),
        "Ladysmith" => Some("p"),
        "Chemainus" => Some("q"),
        _ => None,
    }
}

/// A1 reference for a single cell, e.g. `Timesheet!B12`.
pub fn cell_range(sheet_name: &str, column: &str, row: i64) -> String {
    format!("{}!{}{}", sheet_name, column, row)
}
