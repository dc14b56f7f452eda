//! Diagnostics and error reporting for orbitsim
//!
//! This module inspects particle sets before they are simulated and formats
//! scenario and runtime errors for users.

use crate::engine::ParticleHandle;
use crate::error::Error;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Warning,
    Error,
}

/// A finding about one particle
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub particle: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn error(particle: usize, message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            particle,
            message: message.into(),
        }
    }

    pub fn warning(particle: usize, message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            particle,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Error => "error",
        };
        write!(f, "{}: particle {}: {}", level, self.particle, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items
            .iter()
            .any(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Inspect a particle set before simulating it.
///
/// Errors mark particles whose position will turn into NaN: those at the
/// origin and those already carrying non-finite state. Warnings mark
/// particles that never move and handles listed more than once, which get
/// advanced once per occurrence in every sub-step.
pub fn inspect_particles(particles: &[ParticleHandle]) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();

    for (index, handle) in particles.iter().enumerate() {
        let p = handle.borrow();
        if !p.is_finite() {
            diagnostics.push(Diagnostic::error(
                index,
                format!(
                    "non-finite state (x = {}, y = {}, ang_vel = {})",
                    p.pos.x, p.pos.y, p.ang_vel
                ),
            ));
        } else if p.radius() == 0.0 {
            diagnostics.push(Diagnostic::error(
                index,
                "at the origin; its position becomes NaN on the first sub-step",
            ));
        } else if p.ang_vel == 0.0 {
            diagnostics.push(Diagnostic::warning(index, "zero angular velocity, never moves"));
        }

        if let Some(first) = particles[..index].iter().position(|h| Rc::ptr_eq(h, handle)) {
            diagnostics.push(Diagnostic::warning(
                index,
                format!("same handle as particle {first}; advanced twice per sub-step"),
            ));
        }
    }

    for d in diagnostics.iter() {
        log::warn!("{}", d);
    }

    diagnostics
}

/// Format a scenario error, quoting the offending YAML line when known
pub fn format_config_error(error: &Error, source: &str) -> String {
    let mut msg = format!("Scenario error: {}", error);

    if let Error::Config(yaml) = error {
        if let Some(line) = yaml.location().map(|loc| loc.line()) {
            // serde_yaml lines are 1-based
            if let Some(text) = source.lines().nth(line.saturating_sub(1)) {
                msg.push_str(&format!("\n  at line {}: {}", line, text));
            }
        }
    }

    msg
}

/// Format a runtime error with context
pub fn format_runtime_error(error: &Error) -> String {
    match error.particle_index() {
        Some(index) => format!("Runtime error in particle {}: {}", index, error),
        None => format!("Runtime error: {}", error),
    }
}
