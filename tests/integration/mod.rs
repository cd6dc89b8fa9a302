//! Integration tests for the treefs namespace

mod cli_parse;
mod namespace_scenario;
mod script_run;
mod tree_properties;
