use core::fmt;

use crate::render::RenderError;

/// The tick phases that can fail, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AdvanceBigBalls,
    AdvancePlayer,
    Render,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdvanceBigBalls => write!(f, "advance-big-balls"),
            Self::AdvancePlayer => write!(f, "advance-player"),
            Self::Render => write!(f, "render"),
        }
    }
}

/// Which entity a fault was found on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityRef {
    Player,
    BigBall(usize),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::BigBall(i) => write!(f, "big ball #{i}"),
        }
    }
}

#[derive(Debug)]
pub enum TickFault {
    NonFinitePosition { phase: Phase, entity: EntityRef },
    Render(RenderError),
}

impl TickFault {
    pub fn phase(&self) -> Phase {
        match self {
            Self::NonFinitePosition { phase, .. } => *phase,
            Self::Render(_) => Phase::Render,
        }
    }
}

impl fmt::Display for TickFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinitePosition { phase, entity } => {
                write!(f, "{phase}: {entity} has a non-finite position")
            }
            Self::Render(err) => write!(f, "render: {err}"),
        }
    }
}

impl std::error::Error for TickFault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::NonFinitePosition { .. } => None,
        }
    }
}
