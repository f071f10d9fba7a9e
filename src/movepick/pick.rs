//! The stage of a `MovePicker`. Stages of one mode are numbered
//! contiguously so a stage can advance with a plain increment.

use std::fmt;
use std::mem;

#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Pick {
    // Main search
    MainTT = 0,
    CapturesInit = 1,
    GoodCaptures = 2,
    Refutations = 3,
    QuietInit = 4,
    Quiets = 5,
    BadCaptures = 6,
    // Evasions, shared by main search and quiescence
    EvasionTT = 7,
    EvasionInit = 8,
    Evasions = 9,
    // ProbCut
    ProbCutTT = 10,
    ProbCutInit = 11,
    ProbCutCaptures = 12,
    // Quiescence
    QSearchTT = 13,
    QCapturesInit = 14,
    QCaptures = 15,
    QChecks = 16,
    // Terminal
    Done = 17,
}

impl Pick {
    /// Advances to the next stage of the same mode.
    #[inline]
    pub fn incr(&mut self) {
        debug_assert_ne!(*self, Pick::Done);
        unsafe {
            *self = mem::transmute(*self as u8 + 1);
        }
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Pick::MainTT => "MainTT",
            Pick::CapturesInit => "CapturesInit",
            Pick::GoodCaptures => "GoodCaptures",
            Pick::Refutations => "Refutations",
            Pick::QuietInit => "QuietInit",
            Pick::Quiets => "Quiets",
            Pick::BadCaptures => "BadCaptures",
            Pick::EvasionTT => "EvasionTT",
            Pick::EvasionInit => "EvasionInit",
            Pick::Evasions => "Evasions",
            Pick::ProbCutTT => "ProbCutTT",
            Pick::ProbCutInit => "ProbCutInit",
            Pick::ProbCutCaptures => "ProbCutCaptures",
            Pick::QSearchTT => "QSearchTT",
            Pick::QCapturesInit => "QCapturesInit",
            Pick::QCaptures => "QCaptures",
            Pick::QChecks => "QChecks",
            Pick::Done => "Done",
        })
    }
}
