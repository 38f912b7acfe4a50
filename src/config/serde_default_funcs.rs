pub const fn serde_default_as_true() -> bool {
    return true;
}

pub const fn serde_default_1() -> usize {
    return 1;
}

pub const fn serde_default_frame_interval_ms() -> u64 {
    return 33;
}

pub fn serde_default_link_opener() -> String {
    if cfg!(target_os = "macos") {
        return String::from("open");
    } else {
        return String::from("xdg-open");
    }
}

pub const fn serde_default_drag_margin() -> u16 {
    return 4;
}

pub const fn serde_default_minimize_delay_ms() -> u64 {
    return 500;
}

pub const fn serde_default_padding_cols() -> u16 {
    return 2;
}

pub const fn serde_default_padding_rows() -> u16 {
    return 1;
}

pub const fn serde_default_dock_base_size() -> f32 {
    return 5.0;
}

pub const fn serde_default_dock_max_size() -> f32 {
    return 8.0;
}

pub const fn serde_default_dock_influence_radius() -> f32 {
    return 20.0;
}

pub const fn serde_default_dock_max_lift() -> f32 {
    return 1.0;
}

pub const fn serde_default_dock_stiffness() -> f32 {
    return 350.0;
}

pub const fn serde_default_dock_mass() -> f32 {
    return 0.5;
}

pub const fn serde_default_dock_compact_below_cols() -> u16 {
    return 72;
}

pub const fn serde_default_dock_compact_size() -> f32 {
    return 4.0;
}

pub fn serde_default_owner_name() -> String {
    return String::from("Sabiha");
}

pub fn serde_default_short_name() -> String {
    return String::from("Sabi");
}

pub fn serde_default_email() -> String {
    return String::from("sabihaecemylmaz@gmail.com");
}

pub fn serde_default_instagram_handle() -> String {
    return String::from("@heyiamsabi");
}

pub fn serde_default_instagram_url() -> String {
    return String::from("https://www.instagram.com/heyiamsabi");
}
