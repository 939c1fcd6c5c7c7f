use std::time::Instant;

/// Wall-clock time spent in each named phase of a run, in nanoseconds.
#[derive(Clone, Debug)]
pub struct Timer {
    pub total_time: u128,
    pub phases: Vec<(&'static str, u128)>,
    curr: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self { total_time: 0, phases: Vec::new(), curr: Instant::now() }
    }
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the running phase under `name` and starts the next one.
    #[inline(always)]
    pub fn lap(&mut self, name: &'static str) -> u128 {
        let diff = self.curr.elapsed().as_nanos();
        self.total_time += diff;
        self.phases.push((name, diff));
        self.curr = Instant::now();
        diff
    }

    pub fn report(&self) -> String {
        let mut out = String::new();

        for (name, time) in self.phases.iter() {
            out.push_str(&format!("time {} {} ns\n", name, time));
        }
        out.push_str(&format!("time total {} ns\n", self.total_time));

        out
    }
}

#[test]
fn test_timer() {
    use std::{thread, time};

    let mut timer = Timer::new();

    thread::sleep(time::Duration::from_millis(20));
    timer.lap("sleep");
    timer.lap("nothing");

    assert_eq!(timer.phases.len(), 2);
    assert!(timer.phases[0].1 >= 20_000_000);
    assert_eq!(timer.total_time, timer.phases[0].1 + timer.phases[1].1);
    assert!(timer.report().starts_with("time sleep "));
    assert!(timer.report().ends_with(&format!("time total {} ns\n", timer.total_time)));
}
