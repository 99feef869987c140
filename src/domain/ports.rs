/// Source of lotto numbers for ticket generation.
pub trait NumberPicker {
    /// Returns `count` distinct numbers from `min..=max`.
    fn pick_unique(&mut self, min: u8, max: u8, count: usize) -> Vec<u8>;
}

impl<P: NumberPicker + ?Sized> NumberPicker for &mut P {
    fn pick_unique(&mut self, min: u8, max: u8, count: usize) -> Vec<u8> {
        (**self).pick_unique(min, max, count)
    }
}
