// src/template/boilerplate.rs
// Versioned template bodies shipped with the binary. These are external
// assets consumed as-is; this service never generates or edits them.

pub const REACT_BASE: &str = include_str!("../../assets/react_base.txt");
pub const NODE_BASE: &str = include_str!("../../assets/node_base.txt");
