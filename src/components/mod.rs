pub mod comic_stickers;
pub mod contact_form;
pub mod fluid_background;
pub mod hero_effects;
pub mod hero_parallax;
pub mod hero_shader;
pub mod icons;
pub mod nav;
pub mod project_card;
pub mod project_modal;
pub mod service_card;
pub mod whatsapp_button;
