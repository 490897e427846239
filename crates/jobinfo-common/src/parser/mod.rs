//! Field extraction from the text report of `qstat -xf`.
//!
//! A report is a block of `label = value` lines. Long values wrap onto
//! following lines without a label, so fields that can wrap keep absorbing
//! lines until one opens a known attribute (`label =`).
//!
//! ```text
//! Job Id: 4211.pbs01
//!     Job_Name = test.sh
//!     job_state = R
//!     resources_used.mem = 4194304kb
//!     Submit_arguments = -N test
//!         -l walltime=01:00:00
//!         run.sh
//! ```

mod cursor;
pub mod fields;
mod result;

pub use cursor::LineCursor;
pub use fields::{Continuation, DerivedField, Fallback, FieldSpec, Postprocess};
pub use result::{FieldValue, ParseResult, UNKNOWN};

use crate::error::{self, FieldTableError};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static PBS_PARSER: LazyLock<StatusBlockParser> = LazyLock::new(|| {
    StatusBlockParser::pbs().expect("built-in PBS field table is invalid")
});

/// Parse a `qstat -xf` report with the built-in PBS field table.
pub fn parse(raw_text: &str) -> ParseResult {
    PBS_PARSER.parse(raw_text)
}

/// Table driven parser for one status block.
#[derive(Clone, Debug)]
pub struct StatusBlockParser {
    fields: Vec<FieldSpec>,
    derived: Vec<DerivedField>,
    fallbacks: Vec<Fallback>,
}

impl StatusBlockParser {
    pub fn new(
        fields: Vec<FieldSpec>,
        derived: Vec<DerivedField>,
        fallbacks: Vec<Fallback>,
    ) -> error::Result<Self> {
        let mut names = HashSet::new();
        for name in fields
            .iter()
            .map(|f| f.name)
            .chain(derived.iter().map(|d| d.name))
        {
            if !names.insert(name) {
                return Err(FieldTableError::DuplicateField(name.to_string()));
            }
        }

        for d in &derived {
            match fields.iter().find(|f| f.name == d.source) {
                None => {
                    return Err(FieldTableError::UnknownSource {
                        derived: d.name.to_string(),
                        source_field: d.source.to_string(),
                    })
                }
                Some(f) if f.exposed => {
                    return Err(FieldTableError::ExposedSource {
                        derived: d.name.to_string(),
                        source_field: d.source.to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        if let Some(fb) = fallbacks
            .iter()
            .find(|fb| !fields.iter().any(|f| f.name == fb.field))
        {
            return Err(FieldTableError::UnknownFallback(fb.field.to_string()));
        }

        Ok(Self {
            fields,
            derived,
            fallbacks,
        })
    }

    /// Parser for PBS Pro / OpenPBS `qstat -xf` reports.
    pub fn pbs() -> error::Result<Self> {
        Self::new(
            fields::pbs_fields()?,
            fields::pbs_derived(),
            fields::pbs_fallbacks()?,
        )
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Extract every known field from `raw_text`. Never fails: fields that
    /// do not appear come back as [FieldValue::Unknown].
    pub fn parse(&self, raw_text: &str) -> ParseResult {
        let mut found: HashMap<&'static str, String> = HashMap::new();
        let mut cursor = LineCursor::new(raw_text);

        while let Some(line) = cursor.next_line() {
            for spec in &self.fields {
                let Some(mut value) = spec.capture(line) else {
                    continue;
                };
                if let Continuation::Until {
                    stop_prefixes,
                    stop_suffix,
                } = &spec.continuation
                {
                    absorb_continuation(&mut cursor, &mut value, stop_prefixes, *stop_suffix);
                }
                found.insert(spec.name, spec.postprocess.apply(value));
            }
        }

        for fallback in &self.fallbacks {
            if found.contains_key(fallback.field) {
                continue;
            }
            if let Some(caps) = fallback.matcher.captures(raw_text) {
                let value = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
                crate::log!(trace, "{} resolved through fallback", fallback.field);
                found.insert(fallback.field, value);
            }
        }

        let mut out = Vec::with_capacity(self.fields.len());
        for spec in &self.fields {
            if spec.exposed {
                out.push((spec.name, FieldValue::from(found.get(spec.name).cloned())));
                continue;
            }
            for d in self.derived.iter().filter(|d| d.source == spec.name) {
                let value = found
                    .get(spec.name)
                    .map(|raw| (d.derive)(raw).unwrap_or_else(|| raw.clone()));
                out.push((d.name, FieldValue::from(value)));
            }
        }

        ParseResult::new(out)
    }
}

/// Append following lines to `value`, trimmed and without separators, until
/// a line opens one of the `stop_prefixes` attributes or `value` ends with
/// `stop_suffix`.
fn absorb_continuation(
    cursor: &mut LineCursor<'_>,
    value: &mut String,
    stop_prefixes: &[&str],
    stop_suffix: Option<&str>,
) {
    loop {
        if stop_suffix.is_some_and(|suffix| value.ends_with(suffix)) {
            return;
        }
        let Some(next) = cursor.peek() else {
            return;
        };
        let next = next.trim();
        if stop_prefixes
            .iter()
            .any(|label| fields::starts_attribute(next, label))
        {
            return;
        }
        value.push_str(next);
        cursor.advance();
    }
}
