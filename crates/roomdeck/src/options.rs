use bitflags::bitflags;

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RoomdeckOptions: u32 {
        /// Are we on light theme?
        const LightTheme = 1 << 0;

        /// Debug overlay: backend, entity count, frame counter
        const Debug = 1 << 1;

        /// Skip the 3D capability search and use the isometric view
        const ForceIsometric = 1 << 2;
    }
}

impl Default for RoomdeckOptions {
    fn default() -> Self {
        RoomdeckOptions::empty()
    }
}
