// HSL fill color for particles, built from the shared hue and rendered as a
// CSS color string for the 2d canvas context.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Hsl {
        Hsl {
            hue: hue % 360,
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }

    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}
