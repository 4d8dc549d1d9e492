//! Station-to-station connections
//!
//! A [`Connection`] relates a launch station to a receive station: the world
//! direction between their positions, that same direction expressed in each
//! station's local frame, and two safety flags. A launch is safe when the
//! direction leaves the surface outward (positive k component at the launch
//! station); reception is safe when it arrives from outside (negative k
//! component at the receive station). Anything else would pass through a
//! planet's interior.

use crate::coordinates::Direction;
use crate::station::Station;
use log::warn;

/// The geometry of a directed link between two stations
///
/// Holds derived values only; the stations themselves are read during
/// construction and not retained.
#[derive(Debug, Clone)]
pub struct Connection {
    world_direction: Direction,
    launch_local: Direction,
    receive_local: Direction,
    safe_launch: bool,
    safe_receive: bool,
}

impl Connection {
    /// Evaluates the link from `launch` toward `receive`
    ///
    /// The world direction is the (non-normalized) vector from the launch
    /// station's position to the receive station's position. Unsafe
    /// geometry is flagged and logged, never rejected: the caller decides
    /// what to do with a link that crosses a surface.
    pub fn between(launch: &Station<'_>, receive: &Station<'_>) -> Connection {
        let world_direction = receive.position() - launch.position();

        let launch_local = launch.world_to_local(&world_direction);
        let receive_local = receive.world_to_local(&world_direction);

        // Outbound must point away from the launch surface, inbound must
        // arrive from outside the receive surface
        let safe_launch = launch_local.z > 0.0;
        let safe_receive = receive_local.z < 0.0;

        if !safe_launch {
            warn!("connection departs into the launch planet's interior");
        }
        if !safe_receive {
            warn!("connection arrives through the receive planet's interior");
        }

        Connection {
            world_direction,
            launch_local,
            receive_local,
            safe_launch,
            safe_receive,
        }
    }

    /// Vector from the launch position to the receive position, in world
    /// coordinates
    pub fn world_direction(&self) -> Direction {
        self.world_direction
    }

    /// The link direction in the launch station's frame
    pub fn launch_local(&self) -> Direction {
        self.launch_local
    }

    /// The link direction in the receive station's frame
    pub fn receive_local(&self) -> Direction {
        self.receive_local
    }

    /// True when the link leaves the launch surface outward
    pub fn safe_launch(&self) -> bool {
        self.safe_launch
    }

    /// True when the link arrives at the receive surface from outside
    pub fn safe_receive(&self) -> bool {
        self.safe_receive
    }

    /// True when both endpoints are safe
    pub fn is_safe(&self) -> bool {
        self.safe_launch && self.safe_receive
    }
}
