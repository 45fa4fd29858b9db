use crate::board::Grid;
use crate::core::location::{Location, ORTHOGONAL_STEPS};
use crate::core::tile::TileKind;
use crate::error::BoardError;
use crate::search::limits::SearchLimits;

/// Stateless queries over a borrowed [`Grid`].
///
/// Nothing here mutates the grid or any argument; every method is a pure
/// function of its inputs.
#[derive(Debug, Clone, Copy)]
pub struct BoardQuery<'g> {
    grid: &'g Grid,
    limits: SearchLimits,
}

impl<'g> BoardQuery<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self::with_limits(grid, SearchLimits::default())
    }

    pub fn with_limits(grid: &'g Grid, limits: SearchLimits) -> Self {
        Self { grid, limits }
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    #[inline]
    pub fn tile_at(&self, location: Location) -> Result<TileKind, BoardError> {
        self.grid.tile_at(location)
    }

    #[inline]
    pub fn in_board(&self, location: Location) -> bool {
        self.grid.in_board(location)
    }

    #[inline]
    pub fn is_accessible(&self, location: Location) -> Result<bool, BoardError> {
        Ok(self.tile_at(location)?.is_accessible())
    }

    #[inline]
    pub fn is_door(&self, location: Location) -> Result<bool, BoardError> {
        Ok(self.tile_at(location)?.is_door())
    }

    /// The four orthogonal neighbors: west, east, north, south.
    ///
    /// Neighbors of edge tiles may be off the board; callers filter with
    /// [`BoardQuery::in_board`]. At the `i32` limits a step saturates, which
    /// leaves the coordinate unchanged and still off the board.
    #[inline]
    pub fn adjacent_locations(&self, location: Location) -> [Location; 4] {
        ORTHOGONAL_STEPS.map(|step| location.saturating_add(step))
    }

    /// Whether a token standing on `from` may step onto the door at `door`.
    ///
    /// A north/south door is entered only from the tile directly above or below
    /// it, an east/west door only from the tile directly left or right of it.
    pub fn door_accessible(&self, from: Location, door: Location) -> Result<bool, BoardError> {
        match self.tile_at(door)? {
            TileKind::DoorNorthSouth => Ok(from.x == door.x && from.y.abs_diff(door.y) == 1),
            TileKind::DoorEastWest => Ok(from.y == door.y && from.x.abs_diff(door.x) == 1),
            kind => Err(BoardError::NotADoor {
                location: door,
                kind,
            }),
        }
    }
}
