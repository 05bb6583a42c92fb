// Shared rainbow hue, advanced by the host's interval timer and read by the
// particle draw pass.

pub struct HueCycler {
    hue: u16,
    step: u16,
}

impl HueCycler {
    pub const DEFAULT_STEP: u16 = 2;

    pub fn new(step: u16) -> HueCycler {
        HueCycler::starting_at(0, step)
    }

    pub fn starting_at(hue: u16, step: u16) -> HueCycler {
        HueCycler {
            hue: hue % 360,
            step: step % 360,
        }
    }

    pub fn tick(&mut self) {
        self.hue = (self.hue + self.step) % 360;
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }
}

impl Default for HueCycler {
    fn default() -> Self {
        HueCycler::new(HueCycler::DEFAULT_STEP)
    }
}
