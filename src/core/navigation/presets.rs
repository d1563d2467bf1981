use crate::core::data::region::Region;

/// Named regions worth flying to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Original,
    Minibrot,
    Bulb,
    Tentacle,
    JuliaIsland,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Original,
        Preset::Minibrot,
        Preset::Bulb,
        Preset::Tentacle,
        Preset::JuliaIsland,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Preset::Original => "Mandelbrot Original",
            Preset::Minibrot => "Minibrot",
            Preset::Bulb => "Bulb",
            Preset::Tentacle => "Tentacle",
            Preset::JuliaIsland => "Julia Island",
        }
    }

    /// `[x_min, x_max, y_min, y_max]`
    #[must_use]
    pub fn bounds(self) -> [f64; 4] {
        match self {
            Preset::Original => [-2.25, 1.25, -1.5, 1.5],
            Preset::Minibrot => [-1.943, -1.94, -0.0012, 0.0012],
            Preset::Bulb => [-1.764, -1.7527, -0.01925, -0.0109],
            Preset::Tentacle => [
                -1.768_562_608,
                -1.768_562_604_5,
                -0.000_790_008,
                -0.000_790_005,
            ],
            Preset::JuliaIsland => [
                -1.768_779_3,
                -1.768_778_42,
                -0.001_739_1,
                -0.001_738_71,
            ],
        }
    }

    #[must_use]
    pub fn region(self) -> Region {
        let [x_min, x_max, y_min, y_max] = self.bounds();

        Region::new(x_min, x_max, y_min, y_max).expect("preset bounds are finite")
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Preset> {
        let label = label.trim();

        Self::ALL
            .into_iter()
            .find(|preset| preset.label().eq_ignore_ascii_case(label))
    }
}
