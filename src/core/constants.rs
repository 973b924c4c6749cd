/// Width and height of the shared grid, in cells.
pub const GRID_SIZE: usize = 10;

/// Points awarded per filled cell of a successfully placed piece.
pub const POINTS_PER_CELL: u32 = 10;

/// Colors assigned to players cyclically in join order.
pub const PLAYER_PALETTE: [&str; 6] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899",
];
