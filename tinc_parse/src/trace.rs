use crate::symtab::Ty;
use std::fmt;

/// One line of parser output. The parser pushes an event per recognized
/// declaration and per recognized assignment, in recognition order; the
/// Display wording is asserted on by tests and matches the driver's
/// output exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Declared { name: String, ty: Ty },
    Assigned { name: String, value: String },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TraceEvent::Declared { name, ty } => {
                write!(f, "Variable declared: Type={}, Name={}", ty, name)
            }
            TraceEvent::Assigned { name, value } => {
                write!(f, "Variable assigned: Name={}, Value={}", name, value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_line_wording() {
        let ev = TraceEvent::Declared {
            name: String::from("num1"),
            ty: Ty::Int,
        };
        assert_eq!(ev.to_string(), "Variable declared: Type=int, Name=num1");
    }

    #[test]
    fn assigned_line_wording() {
        let ev = TraceEvent::Assigned {
            name: String::from("num1"),
            value: String::from("1"),
        };
        assert_eq!(ev.to_string(), "Variable assigned: Name=num1, Value=1");
    }
}
