/// Little-endian odometer over `len` digits of the given radix. Digit `j`
/// selects the card assigned to beat `j`, so stepping the counter walks
/// every card combination exactly once without ever materializing the
/// `radix^len` count, which overflows fixed-width integers long before the
/// search would finish anyway.
#[derive(Debug, Clone)]
pub struct MixedRadixCounter {
    digits: Vec<usize>,
    radix: usize,
    exhausted: bool,
}

impl MixedRadixCounter {
    pub fn new(radix: usize, len: usize) -> Self {
        Self {
            digits: vec![0; len],
            radix,
            exhausted: radix == 0 || len == 0,
        }
    }

    /// Current combination, or `None` once every one has been stepped past.
    pub fn digits(&self) -> Option<&[usize]> {
        if self.exhausted {
            None
        } else {
            Some(&self.digits)
        }
    }

    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        for digit in &mut self.digits {
            *digit += 1;
            if *digit < self.radix {
                return;
            }
            *digit = 0;
        }
        self.exhausted = true;
    }
}
