/// Fire-and-forget visual effect requests.
///
/// The renderer implements whichever hooks it supports; every method has a
/// no-op default so the core never probes for capabilities at runtime.
pub trait EffectSink {
    /// Obstacle destroyed the hard way.
    fn explosion(&mut self, _col: i32, _row: i32) {}
    /// Item, gas can or life picked up.
    fn collect(&mut self, _col: i32, _row: i32) {}
    /// Floating score delta.
    fn score_popup(&mut self, _col: i32, _row: i32, _points: i32) {}
    /// Transmutation residue; `trap` selects the red variant.
    fn smoke(&mut self, _col: i32, _row: i32, _trap: bool) {}
    /// `dd`/`cc` row sweep.
    fn row_smoke(&mut self, _row: i32) {}
    /// `dG` screen sweep.
    fn screen_smoke(&mut self, _top_row: i32, _bottom_row: i32) {}
    /// A seed ripened or a rock yielded a bonus.
    fn growth(&mut self, _col: i32, _row: i32) {}
    /// Cursor darts across a harvested range and snaps back.
    fn dash(&mut self, _from: (i32, i32), _to: (i32, i32)) {}
    fn shake(&mut self) {}
    fn transmute_started(&mut self, _col: i32, _row: i32) {}
    fn transmute_stopped(&mut self) {}
}

/// Default sink that ignores every request.
pub struct NullEffects;

impl EffectSink for NullEffects {}
