//! The portal's architecture record.
//!
//! Everything here is compile-time data. [`ContextRecord::portal`] hands out
//! the same value on every call; nothing mutates it afterwards.
//!
//! Mappings are kept as ordered slices so rendering and JSON output follow
//! declaration order.

use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

// =============================================================================
// Types
// =============================================================================

/// Category of a row-level or system error raised by the portal's importers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// A field value failed validation.
    Validation,
    /// A row failed while being processed.
    Processing,
    /// Failure outside any single row.
    System,
}

impl ErrorCategory {
    /// Lowercase name, as used in the summary and in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Processing => "processing",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered field name → descriptive type pairs.
///
/// Types are labels (`"int"`, `"str"`), not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema(&'static [(&'static str, &'static str)]);

impl FieldSchema {
    /// Wrap a static list of fields.
    pub const fn new(fields: &'static [(&'static str, &'static str)]) -> Self {
        Self(fields)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &'static [(&'static str, &'static str)] {
        self.0
    }

    /// Look up a field's type label.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|(name, _)| *name == field).map(|(_, ty)| *ty)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Renders as `{'field': 'type', ...}`.
impl fmt::Display for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, ty)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{name}': '{ty}'")?;
        }
        f.write_str("}")
    }
}

impl Serialize for FieldSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, ty) in self.0 {
            map.serialize_entry(name, ty)?;
        }
        map.end()
    }
}

/// A mixin and what it is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mixin {
    /// Class name, e.g. `BulkImportMixin`.
    pub name: &'static str,
    /// Responsibilities in declaration order.
    pub responsibilities: &'static [&'static str],
}

/// Expected shape of one error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorType {
    /// Which category this is.
    pub category: ErrorCategory,
    /// Fields carried by errors of this category.
    pub fields: FieldSchema,
}

/// Guidelines for one practice area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeArea {
    /// Area key, e.g. `performance`.
    pub area: &'static str,
    /// Guidelines in declaration order.
    pub practices: &'static [&'static str],
}

/// Architecture facts about the admin portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContextRecord {
    /// Top-level building blocks of the portal.
    pub core_components: &'static [&'static str],
    /// Mixin name → responsibilities.
    #[serde(serialize_with = "serialize_mixins")]
    pub mixin_responsibilities: &'static [Mixin],
    /// Error category → field schema.
    #[serde(serialize_with = "serialize_error_types")]
    pub error_types: &'static [ErrorType],
    /// Session flags tracking process status.
    pub session_keys: &'static [&'static str],
    /// Field names holding personally identifiable information.
    pub pii_fields: &'static [&'static str],
    /// Practice area → guidelines.
    #[serde(serialize_with = "serialize_practices")]
    pub best_practices: &'static [PracticeArea],
}

impl ContextRecord {
    /// The portal's record.
    pub const fn portal() -> Self {
        PORTAL_RECORD
    }

    /// Responsibilities of the named mixin.
    pub fn mixin(&self, name: &str) -> Option<&'static [&'static str]> {
        self.mixin_responsibilities
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.responsibilities)
    }

    /// Field schema for an error category.
    pub fn error_type(&self, category: ErrorCategory) -> Option<FieldSchema> {
        self.error_types
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.fields)
    }

    /// Guidelines for a practice area.
    pub fn practices(&self, area: &str) -> Option<&'static [&'static str]> {
        self.best_practices
            .iter()
            .find(|p| p.area == area)
            .map(|p| p.practices)
    }

    /// Whether `field` is flagged as PII.
    pub fn is_pii_field(&self, field: &str) -> bool {
        self.pii_fields.iter().any(|f| *f == field)
    }
}

fn serialize_mixins<S: Serializer>(mixins: &[Mixin], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(mixins.iter().map(|m| (m.name, m.responsibilities)))
}

fn serialize_error_types<S: Serializer>(
    types: &[ErrorType],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(types.iter().map(|e| (e.category, e.fields)))
}

fn serialize_practices<S: Serializer>(
    areas: &[PracticeArea],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(areas.iter().map(|p| (p.area, p.practices)))
}

// =============================================================================
// Data
// =============================================================================

const PORTAL_RECORD: ContextRecord = ContextRecord {
    core_components: &[
        "Django-based admin portal using django-jazzmin",
        "Mixin-based architecture for shared functionality",
        "Process status management system",
        "Bulk import/export system",
        "Resource-based data handling",
    ],
    mixin_responsibilities: &[
        Mixin {
            name: "BulkImportMixin",
            responsibilities: &[
                "Handles file upload and validation",
                "Manages import session state",
                "Provides import form and context",
                "Coordinates with resource for actual import",
            ],
        },
        Mixin {
            name: "AdminExportMixin",
            responsibilities: &[
                "Handles secure export via direct links",
                "Supports filtered exports",
                "Manages export formats and filenames",
                "Logs export actions",
            ],
        },
        Mixin {
            name: "ProcessStatusMixin",
            responsibilities: &[
                "Manages process state transitions",
                "Tracks session state",
                "Coordinates UI updates",
                "Handles process validation",
            ],
        },
        Mixin {
            name: "ReferentialIntegrityMixin",
            responsibilities: &[
                "Validates foreign key references",
                "Preloads and caches reference data",
                "Manages validation errors",
                "Optimizes bulk operations",
            ],
        },
    ],
    error_types: &[
        ErrorType {
            category: ErrorCategory::Validation,
            fields: FieldSchema::new(&[
                ("row_number", "int"),
                ("field", "str"),
                ("value", "str"),
                ("type", "validation"),
            ]),
        },
        ErrorType {
            category: ErrorCategory::Processing,
            fields: FieldSchema::new(&[
                ("row_number", "int"),
                ("message", "str"),
                ("type", "processing"),
            ]),
        },
        ErrorType {
            category: ErrorCategory::System,
            fields: FieldSchema::new(&[("message", "str"), ("type", "system")]),
        },
    ],
    session_keys: &[
        "comp_post_date",
        "loaded_date",
        "validated_date",
        "calculated_date",
        "closed_date",
        "closed_flg",
    ],
    pii_fields: &[
        "patient_name",
        "account_id",
        "ssn",
        "email",
        "phone",
        "address",
        "transaction_id",
        "trans_amt",
        "provider",
        "locums_provider",
    ],
    best_practices: &[
        PracticeArea {
            area: "code_organization",
            practices: &[
                "Keep UI logic in views, not mixins",
                "Use mixins for shared functionality",
                "Maintain consistent error handling",
                "Follow established patterns",
                "Document all changes",
            ],
        },
        PracticeArea {
            area: "performance",
            practices: &[
                "Use bulk operations where possible",
                "Cache reference data",
                "Optimize database queries",
                "Minimize session data",
            ],
        },
        PracticeArea {
            area: "security",
            practices: &[
                "Always validate user input",
                "Protect sensitive data",
                "Maintain audit trails",
                "Follow principle of least privilege",
            ],
        },
    ],
};

// =============================================================================
// Tests
// =============================================================================
