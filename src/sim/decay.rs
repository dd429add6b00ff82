//! Decay-then-drop lifecycle shared by wells and particles

/// An entity whose life fades by a fixed amount each frame
pub trait Decay {
    /// Advance one frame
    fn advance(&mut self);
    /// Remaining life (alive while > 0)
    fn life(&self) -> f32;

    fn is_alive(&self) -> bool {
        self.life() > 0.0
    }
}

/// Advance every entity, then drop the ones that faded out
pub fn advance_all<T: Decay>(entities: &mut Vec<T>) {
    for entity in entities.iter_mut() {
        entity.advance();
    }
    entities.retain(|e| e.is_alive());
}
