// SPDX-License-Identifier: MIT OR Apache-2.0
//! Python literal encoders for settings and socket values.
//!
//! Each function turns one structured value into a literal expression that
//! evaluates back to an equal value inside the host's Python runtime.

/// Format a float so the literal is unambiguously a Python float
///
/// Non-finite values have no Python literal form and are encoded through
/// the `float()` constructor instead.
pub fn py_float(value: f32) -> String {
    if value.is_nan() {
        "float('nan')".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "float('inf')" } else { "float('-inf')" }.to_string()
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Encode an integer
pub fn py_int(value: i32) -> String {
    value.to_string()
}

/// Encode a boolean
pub fn py_bool(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}

/// Encode an enum identifier as a single-quoted literal
pub fn py_enum(value: &str) -> String {
    format!("'{value}'")
}

/// Encode a set of enum identifiers
pub fn py_enum_set(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| py_enum(v)).collect();
    format!("{{{}}}", quoted.join(", "))
}

/// Encode a string as a double-quoted literal
///
/// Embedded quote characters are not escaped; a value containing `"`
/// yields a broken literal. See the pinning test before changing this.
pub fn py_str(value: &str) -> String {
    format!("\"{value}\"")
}

/// Encode a 1D vector as a single-element list
pub fn py_vec1(vec: [f32; 1]) -> String {
    format!("[{}]", py_float(vec[0]))
}

/// Encode a 2D vector as a tuple
pub fn py_vec2(vec: [f32; 2]) -> String {
    format!("({}, {})", py_float(vec[0]), py_float(vec[1]))
}

/// Encode a 3D vector as a tuple
pub fn py_vec3(vec: [f32; 3]) -> String {
    format!(
        "({}, {}, {})",
        py_float(vec[0]),
        py_float(vec[1]),
        py_float(vec[2])
    )
}

/// Encode a 4D vector as a tuple
pub fn py_vec4(vec: [f32; 4]) -> String {
    format!(
        "({}, {}, {}, {})",
        py_float(vec[0]),
        py_float(vec[1]),
        py_float(vec[2]),
        py_float(vec[3])
    )
}

/// Encode an RGB color as a `mathutils.Color` constructor
pub fn py_color(color: [f32; 3]) -> String {
    format!(
        "mathutils.Color(({}, {}, {}))",
        py_float(color[0]),
        py_float(color[1]),
        py_float(color[2])
    )
}
