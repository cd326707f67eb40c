//! Raw header variants per student information system.
//!
//! Each table lists headers exactly as the system exports them. Casing and
//! surrounding whitespace do not matter; the registry normalizes keys when
//! it is built. A header that two systems use for different fields must not
//! appear in either table.

mod deanslist;
mod generic;
mod infinite_campus;
mod powerschool;
mod skyward;
mod teams;

use sis_model::CanonicalField;

/// Header variants contributed by one source system.
#[derive(Debug, Clone, Copy)]
pub struct VariantTable {
    pub system: &'static str,
    pub entries: &'static [(&'static str, CanonicalField)],
}

/// Built-in tables in registry build order.
pub const BUILTIN_TABLES: &[VariantTable] = &[
    VariantTable {
        system: "Skyward",
        entries: skyward::SKYWARD,
    },
    VariantTable {
        system: "PowerSchool",
        entries: powerschool::POWERSCHOOL,
    },
    VariantTable {
        system: "DeansList",
        entries: deanslist::DEANSLIST,
    },
    VariantTable {
        system: "Infinite Campus",
        entries: infinite_campus::INFINITE_CAMPUS,
    },
    VariantTable {
        system: "TEAMS",
        entries: teams::TEAMS,
    },
    VariantTable {
        system: "Generic",
        entries: generic::GENERIC,
    },
];
