/// Content block translated vertically at `speed` times the page scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub speed: f64,
}

impl ParallaxLayer {
    pub const fn new(speed: f64) -> Self {
        Self { speed }
    }

    /// Parse a `data-parallax-speed` attribute value.
    pub fn from_attr(value: &str) -> Option<Self> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite())
            .map(Self::new)
    }

    #[inline]
    pub fn offset(&self, scroll_y: f64) -> f64 {
        scroll_y * self.speed
    }

    pub fn transform(&self, scroll_y: f64) -> String {
        format!("translateY({}px)", self.offset(scroll_y))
    }
}
