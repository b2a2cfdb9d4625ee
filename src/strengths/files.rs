use crate::cards::street::Street;
use anyhow::Context;
use anyhow::Result;

/// Fixed relative layout of the persisted pipeline artifacts.
/// Record order inside each file is canonical index order.

pub fn showdown_path() -> String {
    "out/strengths/showdown.bin".to_string()
}

pub fn lut_path(street: Street) -> String {
    format!("out/strengths/{}_lut.bin", street)
}

pub fn ochs_preflop_path() -> String {
    "out/strengths/ochs_preflop_lut.bin".to_string()
}

pub fn assignments_path(street: Street) -> String {
    format!("out/clustering/{}_assignments.bin", street)
}

pub fn prepare() -> Result<()> {
    for dir in ["out/strengths", "out/clustering"] {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_street_typed() {
        assert_eq!(lut_path(Street::Flop), "out/strengths/flop_lut.bin");
        assert_eq!(lut_path(Street::Rive), "out/strengths/river_lut.bin");
        assert_eq!(
            assignments_path(Street::Turn),
            "out/clustering/turn_assignments.bin"
        );
    }
}
