//! Built-in module set

mod accordion;
mod button;
mod code;
mod divider;
mod heading;
mod image;
mod tabs;
mod text;

pub use accordion::{AccordionItemModule, AccordionModule};
pub use button::ButtonModule;
pub use code::CodeModule;
pub use divider::DividerModule;
pub use heading::HeadingModule;
pub use image::ImageModule;
pub use tabs::{TabModule, TabsModule};
pub use text::TextModule;

use crate::registry::ModuleRegistry;

/// Type keys of the built-in modules
pub const BUILTIN_TYPES: &[&str] = &[
	"text",
	"heading",
	"button",
	"image",
	"code",
	"divider",
	"accordion",
	"accordion_item",
	"tabs",
	"tab",
];

/// Register every built-in module
pub fn register_builtin(registry: &mut ModuleRegistry) {
	registry.register("text", TextModule::new());
	registry.register("heading", HeadingModule::new());
	registry.register("button", ButtonModule::new());
	registry.register("image", ImageModule::new());
	registry.register("code", CodeModule::new());
	registry.register("divider", DividerModule::new());
	registry.register("accordion", AccordionModule::new());
	registry.register("accordion_item", AccordionItemModule::new());
	registry.register("tabs", TabsModule::new());
	registry.register("tab", TabModule::new());
}
