//! Helpers for emitters rendering a [`Model`](crate::model::Model).

/// Name written into generated-file headers.
pub const GENERATOR_NAME: &str = "querygen";

/// Header lines placed at the top of every generated file.
///
/// `version` is the version of the tool that produced the request; an empty
/// version omits the versions block.
pub fn header(version: &str) -> String {
    let mut out = format!("// Code generated by {}. DO NOT EDIT.\n", GENERATOR_NAME);
    if !version.is_empty() {
        out.push_str("// versions:\n");
        out.push_str(&format!("//   {} {}\n", GENERATOR_NAME, version));
    }
    out
}
