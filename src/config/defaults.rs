//! Default value functions for serde deserialization.

pub fn safety_margin() -> f32 {
    1.0
}

pub fn access_clearance() -> f32 {
    1.0
}

pub fn perimeter_spacing() -> f32 {
    20.0
}

pub fn corner_spacing() -> f32 {
    5.0
}

pub fn corner_zone() -> f32 {
    20.0
}

pub fn offset_step() -> f32 {
    10.0
}

pub fn corridor_range() -> f32 {
    60.0
}

pub fn alignment_tolerance() -> f32 {
    20.0
}

pub fn boundary_samples() -> usize {
    5
}

pub fn refine_resolutions() -> Vec<f32> {
    vec![100.0, 50.0, 25.0, 10.0]
}

pub fn wrap_probe_margin() -> f32 {
    50.0
}

pub fn max_iterations() -> usize {
    10_000
}
