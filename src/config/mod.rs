// Command-line settings and variable binding files

pub mod bindings;
pub mod cli;

pub use bindings::{
    apply_assignments, load_bindings, parse_assignment, parse_bindings, BindingsFormat,
};
pub use cli::{build_command, Action};
