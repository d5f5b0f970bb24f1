use ::use_cases::gateways::RandomPicker;

pub struct ThreadRngPicker;

impl RandomPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        use ::rand::Rng as _;

        (len > 0).then(|| ::rand::thread_rng().gen_range(0..len))
    }
}

/// Reproducible picks for a given seed.
pub struct SeededPicker {
    rng: ::std::cell::RefCell<::rand::rngs::StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        use ::rand::SeedableRng as _;

        Self { rng: ::std::cell::RefCell::new(::rand::rngs::StdRng::seed_from_u64(seed)) }
    }
}

impl RandomPicker for SeededPicker {
    fn pick(&self, len: usize) -> Option<usize> {
        use ::rand::Rng as _;

        (len > 0).then(|| self.rng.borrow_mut().gen_range(0..len))
    }
}
