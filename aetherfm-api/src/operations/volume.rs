//! Volume gates; the remote side works on a 0.0..=1.0 scale

crate::define_gate_operation! {
    GetVolumeOperation => GetVolume() -> f32
}

crate::define_gate_operation! {
    SetVolumeOperation => SetVolume(f32) -> bool
}
