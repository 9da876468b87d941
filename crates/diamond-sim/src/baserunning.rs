//! Baserunner advancement.

/// Advance every runner `n` bases, then put the batter on first.
///
/// Each single-base step scores the runner on third (if any) and shifts
/// first to second, second to third. The batter is placed on first
/// after all steps. Returns the new base state and the runs scored.
///
/// The same arithmetic serves hits (`n` = bases reached) and walks
/// (`n` = 1). On a walk this pushes a runner home from third even when
/// first base was open, which is the intended rule simplification.
pub fn advance_runners(bases: [bool; 3], n: u8) -> ([bool; 3], u32) {
    // n = 0 is the identity: nobody advanced, nobody batted.
    if n == 0 {
        return (bases, 0);
    }

    let mut new_bases = bases;
    let mut runs = 0;

    for _ in 0..n {
        if new_bases[2] {
            runs += 1;
        }
        new_bases = [false, new_bases[0], new_bases[1]];
    }
    new_bases[0] = true;

    (new_bases, runs)
}
