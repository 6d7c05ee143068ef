use std::fmt;

/// Index of a node in the arena owned by [`crate::ActiveNodeSet`].
pub type NodeId = usize;

/// How tight or loose a line is, bucketed from its adjustment ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum FitnessClass {
    VeryTight = 0,
    Tight = 1,
    Loose = 2,
    VeryLoose = 3,
}

impl FitnessClass {
    pub const ALL: [FitnessClass; 4] = [
        FitnessClass::VeryTight,
        FitnessClass::Tight,
        FitnessClass::Loose,
        FitnessClass::VeryLoose,
    ];

    pub fn from_ratio(r: f64) -> Self {
        if r < -0.5 {
            FitnessClass::VeryTight
        } else if r <= 0.5 {
            FitnessClass::Tight
        } else if r <= 1.0 {
            FitnessClass::Loose
        } else {
            FitnessClass::VeryLoose
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Adjacent lines whose classes differ by more than one look jarring.
    pub fn is_compatible_with(self, other: FitnessClass) -> bool {
        (self as i32 - other as i32).abs() <= 1
    }
}

/// A feasible break: the state of the scan when a line ends at `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct KnuthNode {
    /// Index of the break element.
    pub position: usize,
    /// Number of lines ending at this break.
    pub line: usize,
    pub fitness: FitnessClass,
    /// Accumulated width, stretch and shrink up to the start of the next line.
    pub total_width: i64,
    pub total_stretch: i64,
    pub total_shrink: i64,
    /// Adjustment ratio of the line ending here.
    pub adjust_ratio: f64,
    pub available_shrink: i64,
    pub available_stretch: i64,
    /// Target width minus natural width of the line ending here.
    pub difference: i64,
    /// Minimum total demerits up to this break.
    pub total_demerits: f64,
    /// Best node for the preceding break.
    pub previous: Option<NodeId>,
    /// Next active node on the same line.
    pub next: Option<NodeId>,
    /// Set on nodes the scan restarted from after running out of feasible breaks.
    pub forced: bool,
}

impl KnuthNode {
    /// The node every breaking starts from.
    pub fn root(position: usize) -> Self {
        Self {
            position,
            line: 0,
            fitness: FitnessClass::Tight,
            total_width: 0,
            total_stretch: 0,
            total_shrink: 0,
            adjust_ratio: 0.0,
            available_shrink: 0,
            available_stretch: 0,
            difference: 0,
            total_demerits: 0.0,
            previous: None,
            next: None,
            forced: false,
        }
    }
}

impl fmt::Display for KnuthNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<KnuthNode at {} {}+{}-{} line:{} prev:#{} dem:{}>",
            self.position,
            self.total_width,
            self.total_stretch,
            self.total_shrink,
            self.line,
            self.previous.map_or(-1, |p| p as i64),
            self.total_demerits
        )
    }
}
