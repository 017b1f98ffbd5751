/// The exploration constant used by PUCT scoring.
pub trait CPUCT {
    fn cpuct(&self, nsb: usize, is_root: bool) -> f32;
}

pub struct ConstantCPUCT(pub f32);

impl CPUCT for ConstantCPUCT {
    fn cpuct(&self, _: usize, _: bool) -> f32 {
        self.0
    }
}

impl Default for ConstantCPUCT {
    fn default() -> Self {
        Self(1.25)
    }
}
