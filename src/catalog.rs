//! Static lookup table of electronic component packages.
//!
//! `Typical_Pins` and `Pitch` are written the way the table has always stored
//! them: list literals where the family has discrete values, free text where it
//! does not.

use crate::domain::model::Record;

pub const FIELD_PACKAGE: &str = "Package";
pub const FIELD_FULL_NAME: &str = "Full_Name";
pub const FIELD_MOUNTING: &str = "Mounting";
pub const FIELD_TYPICAL_PINS: &str = "Typical_Pins";
pub const FIELD_PITCH: &str = "Pitch";
pub const FIELD_BODY_SIZE: &str = "Body_Size";
pub const FIELD_DESCRIPTION: &str = "Description";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageEntry {
    pub package: &'static str,
    pub full_name: &'static str,
    pub mounting: &'static str,
    pub typical_pins: &'static str,
    /// Millimetres.
    pub pitch: &'static str,
    pub body_size: &'static str,
    pub description: &'static str,
}

impl PackageEntry {
    pub fn to_record(&self) -> Record {
        Record::new()
            .with(FIELD_PACKAGE, self.package)
            .with(FIELD_FULL_NAME, self.full_name)
            .with(FIELD_MOUNTING, self.mounting)
            .with(FIELD_TYPICAL_PINS, self.typical_pins)
            .with(FIELD_PITCH, self.pitch)
            .with(FIELD_BODY_SIZE, self.body_size)
            .with(FIELD_DESCRIPTION, self.description)
    }
}

pub static PACKAGE_LOOKUP_TABLE: &[PackageEntry] = &[
    PackageEntry {
        package: "DIP",
        full_name: "Dual In-line Package",
        mounting: "Through-Hole",
        typical_pins: "[8,14,16,18,20,24,28,40]",
        pitch: "[2.54]",
        body_size: "Varies by pin count; 7.62 or 15.24 mm row spacing",
        description: "Two parallel rows of pins for breadboards and sockets.",
    },
    PackageEntry {
        package: "SIP",
        full_name: "Single In-line Package",
        mounting: "Through-Hole",
        typical_pins: "[3,4,5,6,7,8,9,10,12]",
        pitch: "[2.54]",
        body_size: "Varies by pin count",
        description: "One row of pins; common for resistor networks.",
    },
    PackageEntry {
        package: "TO-92",
        full_name: "Transistor Outline 92",
        mounting: "Through-Hole",
        typical_pins: "[3]",
        pitch: "[1.27,2.54]",
        body_size: "4.5 x 3.5 mm",
        description: "Small plastic package for low-power transistors and regulators.",
    },
    PackageEntry {
        package: "TO-220",
        full_name: "Transistor Outline 220",
        mounting: "Through-Hole",
        typical_pins: "[3,5,7]",
        pitch: "[2.54,1.7]",
        body_size: "10 x 15 mm plus tab",
        description: "Power package with a metal tab for heatsink mounting.",
    },
    PackageEntry {
        package: "SOIC",
        full_name: "Small Outline Integrated Circuit",
        mounting: "Surface Mount",
        typical_pins: "[8,14,16,20,24,28]",
        pitch: "[1.27]",
        body_size: "3.9 or 7.5 mm body width",
        description: "Gull-wing leads on two sides; the SMD counterpart of DIP.",
    },
    PackageEntry {
        package: "SSOP",
        full_name: "Shrink Small Outline Package",
        mounting: "Surface Mount",
        typical_pins: "[16,20,24,28]",
        pitch: "[0.65]",
        body_size: "5.3 mm body width",
        description: "Reduced-pitch SOIC.",
    },
    PackageEntry {
        package: "TSSOP",
        full_name: "Thin Shrink Small Outline Package",
        mounting: "Surface Mount",
        typical_pins: "[8,14,16,20,24,28]",
        pitch: "[0.65,0.5]",
        body_size: "4.4 mm body width, 1.0 mm height",
        description: "Thin, narrow outline package for space-constrained boards.",
    },
    PackageEntry {
        package: "SOT-23",
        full_name: "Small Outline Transistor 23",
        mounting: "Surface Mount",
        typical_pins: "[3,5,6]",
        pitch: "[0.95]",
        body_size: "2.9 x 1.3 mm",
        description: "Tiny package for discrete transistors, diodes and simple ICs.",
    },
    PackageEntry {
        package: "QFP",
        full_name: "Quad Flat Package",
        mounting: "Surface Mount",
        typical_pins: "[32,44,64,100,144,208]",
        pitch: "[0.4,0.5,0.65,0.8,1.0]",
        body_size: "7 x 7 mm to 28 x 28 mm",
        description: "Gull-wing leads on all four sides.",
    },
    PackageEntry {
        package: "QFN",
        full_name: "Quad Flat No-lead",
        mounting: "Surface Mount",
        typical_pins: "[16,20,24,32,48,64]",
        pitch: "[0.4,0.5,0.65]",
        body_size: "3 x 3 mm to 9 x 9 mm",
        description: "Leadless pads on the perimeter with an exposed thermal pad.",
    },
    PackageEntry {
        package: "BGA",
        full_name: "Ball Grid Array",
        mounting: "Surface Mount",
        typical_pins: "Variable",
        pitch: "[0.5,0.8,1.0,1.27]",
        body_size: "Varies widely",
        description: "Solder balls in a grid under the package; high pin density.",
    },
    PackageEntry {
        package: "LGA",
        full_name: "Land Grid Array",
        mounting: "Surface Mount / Socket",
        typical_pins: "Variable",
        pitch: "Variable",
        body_size: "Varies widely",
        description: "Flat lands instead of balls; used for CPUs and RF modules.",
    },
    PackageEntry {
        package: "WLCSP",
        full_name: "Wafer Level Chip Scale Package",
        mounting: "Surface Mount",
        typical_pins: "Variable",
        pitch: "[0.35,0.4,0.5]",
        body_size: "Die size",
        description: "Bumps placed directly on the die; no separate package body.",
    },
    PackageEntry {
        package: "0603",
        full_name: "Chip 0603 (imperial)",
        mounting: "Surface Mount",
        typical_pins: "[2]",
        pitch: "N/A",
        body_size: "1.6 x 0.8 mm",
        description: "Two-terminal chip for resistors, capacitors and LEDs.",
    },
    PackageEntry {
        package: "0402",
        full_name: "Chip 0402 (imperial)",
        mounting: "Surface Mount",
        typical_pins: "[2]",
        pitch: "N/A",
        body_size: "1.0 x 0.5 mm",
        description: "Smaller two-terminal chip for dense passive layouts.",
    },
];

/// The whole table as fresh records, in table order.
pub fn package_records() -> Vec<Record> {
    PACKAGE_LOOKUP_TABLE
        .iter()
        .map(PackageEntry::to_record)
        .collect()
}
