use serde::{Deserialize, Serialize};

/// Fractal family evaluated per pixel.
///
/// Internal code passes this enum around; it degrades to a plain integer
/// only at the compute/GPU boundary (see `as_index`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fractal {
    Mandelbrot,
    Julia,
    BurningShip,
    Newton,
}

impl Fractal {
    pub const ALL: [Fractal; 4] = [
        Fractal::Mandelbrot,
        Fractal::Julia,
        Fractal::BurningShip,
        Fractal::Newton,
    ];

    /// Integer selector for the wasm and shader boundaries.
    pub fn as_index(self) -> u8 {
        match self {
            Fractal::Mandelbrot => 0,
            Fractal::Julia => 1,
            Fractal::BurningShip => 2,
            Fractal::Newton => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Fractal> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Fractal::Mandelbrot => "Mandelbrot set",
            Fractal::Julia => "Julia set",
            Fractal::BurningShip => "Burning ship",
            Fractal::Newton => "Newton fractal",
        }
    }
}

/// Sampling strategy for one scheduled frame, and whether the loop keeps
/// running afterwards.
///
/// `None` and `Frame` are single-shot: the scheduler goes idle after one
/// callback. The remaining modes re-arm every frame and converge on the
/// full image progressively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    None,
    Frame,
    Pixels,
    Rows,
    Columns,
}

impl RenderMode {
    pub const ALL: [RenderMode; 5] = [
        RenderMode::None,
        RenderMode::Frame,
        RenderMode::Pixels,
        RenderMode::Rows,
        RenderMode::Columns,
    ];

    pub fn as_index(self) -> u8 {
        match self {
            RenderMode::None => 0,
            RenderMode::Frame => 1,
            RenderMode::Pixels => 2,
            RenderMode::Rows => 3,
            RenderMode::Columns => 4,
        }
    }

    pub fn from_index(index: u8) -> Option<RenderMode> {
        Self::ALL.get(index as usize).copied()
    }

    /// True for modes that keep the frame loop running.
    pub fn is_continuous(self) -> bool {
        matches!(
            self,
            RenderMode::Pixels | RenderMode::Rows | RenderMode::Columns
        )
    }

    pub fn display_name(self) -> &'static str {
        match self {
            RenderMode::None => "None",
            RenderMode::Frame => "Frame",
            RenderMode::Pixels => "Random pixels",
            RenderMode::Rows => "Rows",
            RenderMode::Columns => "Columns",
        }
    }
}

/// Rendering backend selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Device {
    Cpu,
    Gpu,
}

impl Device {
    pub fn display_name(self) -> &'static str {
        match self {
            Device::Cpu => "CPU",
            Device::Gpu => "GPU",
        }
    }
}

/// Settings record pushed from the menu to the viewport controller.
///
/// One record per user toggle, last write wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    pub grid: bool,
    pub noise: bool,
    pub fractal: Fractal,
    pub render_mode: RenderMode,
    pub device: Device,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            grid: false,
            noise: false,
            fractal: Fractal::Mandelbrot,
            render_mode: RenderMode::Pixels,
            device: Device::Cpu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractal_index_roundtrip() {
        for fractal in Fractal::ALL {
            assert_eq!(Fractal::from_index(fractal.as_index()), Some(fractal));
        }
        assert_eq!(Fractal::from_index(4), None);
    }

    #[test]
    fn render_mode_index_roundtrip() {
        for mode in RenderMode::ALL {
            assert_eq!(RenderMode::from_index(mode.as_index()), Some(mode));
        }
        assert_eq!(RenderMode::from_index(5), None);
    }

    #[test]
    fn continuous_modes() {
        assert!(!RenderMode::None.is_continuous());
        assert!(!RenderMode::Frame.is_continuous());
        assert!(RenderMode::Pixels.is_continuous());
        assert!(RenderMode::Rows.is_continuous());
        assert!(RenderMode::Columns.is_continuous());
    }

    #[test]
    fn parameters_serialization_roundtrip() {
        let params = Parameters {
            grid: true,
            noise: false,
            fractal: Fractal::Julia,
            render_mode: RenderMode::Rows,
            device: Device::Gpu,
        };

        let json = serde_json::to_string(&params).unwrap();
        let restored: Parameters = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, params);
    }
}
