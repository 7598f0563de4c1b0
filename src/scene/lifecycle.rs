/// Why the page is being hidden, from `PageTransitionEvent.persisted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHide {
    /// Going into the back/forward cache. The browser suspends frames and
    /// resumes them on restore without re-running the module.
    Cached,
    /// Being unloaded for good.
    Unload,
}

impl PageHide {
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            Self::Cached
        } else {
            Self::Unload
        }
    }

    /// Only an unload releases the mounted effects.
    #[inline]
    pub fn tears_down(self) -> bool {
        self == Self::Unload
    }
}
