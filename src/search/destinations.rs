//! Bounded-depth destination search.
//!
//! A token spends exactly `roll` steps, never stepping back onto a tile already on
//! its own path. Doors end the move on the spot, whatever is left of the roll.

use rustc_hash::FxHashSet;

use crate::core::location::Location;
use crate::error::BoardError;
use crate::search::query::BoardQuery;

impl<'g> BoardQuery<'g> {
    /// Every tile a token on `start` can finish on after moving `roll` steps.
    ///
    /// `exclude` holds tiles the path may not enter; the common call passes
    /// `{start}` (see [`BoardQuery::destinations_from`]). The caller's set is
    /// never modified: each branch extends its own copy with the tile it
    /// leaves, so sibling branches never see each other's trail.
    ///
    /// Fails with [`BoardError::RollLimitExceeded`] before searching if `roll`
    /// is above the configured limit.
    pub fn available_destinations(
        &self,
        roll: u32,
        start: Location,
        exclude: &FxHashSet<Location>,
    ) -> Result<FxHashSet<Location>, BoardError> {
        self.limits().check_roll(roll)?;
        let destinations = self.search(roll, start, exclude)?;
        tracing::debug!(
            roll,
            %start,
            excluded = exclude.len(),
            destinations = destinations.len(),
            "Computed available destinations"
        );
        Ok(destinations)
    }

    /// Destinations for a token leaving `start`, which it may not re-enter.
    pub fn destinations_from(
        &self,
        roll: u32,
        start: Location,
    ) -> Result<FxHashSet<Location>, BoardError> {
        let mut exclude = FxHashSet::default();
        exclude.insert(start);
        self.available_destinations(roll, start, &exclude)
    }

    fn search(
        &self,
        roll: u32,
        start: Location,
        exclude: &FxHashSet<Location>,
    ) -> Result<FxHashSet<Location>, BoardError> {
        let mut out = FxHashSet::default();
        if roll == 0 {
            out.insert(start);
            return Ok(out);
        }

        // Steps that would leave the i32 range cannot land on any board.
        for next in start.neighbors().into_iter().flatten() {
            if exclude.contains(&next) {
                continue;
            }
            if !self.in_board(next) || !self.is_accessible(next)? {
                continue;
            }

            if self.is_door(next)? {
                if self.door_accessible(start, next)? {
                    tracing::trace!(%start, door = %next, roll, "Move stops at door");
                    out.insert(next);
                }
                continue;
            }

            let mut trail = exclude.clone();
            trail.insert(start);
            out.extend(self.search(roll - 1, next, &trail)?);
        }

        Ok(out)
    }
}
