/// Index of a texture in the registry — also the slot number the JS
/// loader binds the decoded image to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot(pub u32);

/// Event forwarded to the UI layer (day-counter readout etc.).
/// 4 floats, read out of a flat buffer on the JS side.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}
