//! Keyframes for the built-in entrance animations

/// Animation types with bundled keyframes
pub const ANIMATION_TYPES: &[&str] = &[
	"fade",
	"fade-out",
	"slide-up",
	"slide-down",
	"slide-left",
	"slide-right",
	"zoom-in",
	"zoom-out",
	"bounce",
	"flip",
	"rotate",
	"pulse",
];

fn frames(animation_type: &str) -> Option<&'static str> {
	let frames = match animation_type {
		"fade" => "    from { opacity: 0; }\n    to { opacity: 1; }\n",
		"fade-out" => "    from { opacity: 1; }\n    to { opacity: 0; }\n",
		"slide-up" => {
			"    from { opacity: 0; transform: translateY(30px); }\n    to { opacity: 1; transform: translateY(0); }\n"
		}
		"slide-down" => {
			"    from { opacity: 0; transform: translateY(-30px); }\n    to { opacity: 1; transform: translateY(0); }\n"
		}
		"slide-left" => {
			"    from { opacity: 0; transform: translateX(30px); }\n    to { opacity: 1; transform: translateX(0); }\n"
		}
		"slide-right" => {
			"    from { opacity: 0; transform: translateX(-30px); }\n    to { opacity: 1; transform: translateX(0); }\n"
		}
		"zoom-in" => {
			"    from { opacity: 0; transform: scale(0.8); }\n    to { opacity: 1; transform: scale(1); }\n"
		}
		"zoom-out" => {
			"    from { opacity: 0; transform: scale(1.2); }\n    to { opacity: 1; transform: scale(1); }\n"
		}
		"bounce" => {
			"    0%, 20%, 50%, 80%, 100% { transform: translateY(0); }\n    40% { transform: translateY(-20px); }\n    60% { transform: translateY(-10px); }\n"
		}
		"flip" => {
			"    from { opacity: 0; transform: perspective(400px) rotateY(90deg); }\n    to { opacity: 1; transform: perspective(400px) rotateY(0); }\n"
		}
		"rotate" => {
			"    from { opacity: 0; transform: rotate(-180deg); }\n    to { opacity: 1; transform: rotate(0); }\n"
		}
		"pulse" => {
			"    0% { transform: scale(1); }\n    50% { transform: scale(1.05); }\n    100% { transform: scale(1); }\n"
		}
		_ => return None,
	};
	Some(frames)
}

/// `@keyframes <prefix>-<type>` block, `None` for unknown types
pub fn keyframes_css(class_prefix: &str, animation_type: &str) -> Option<String> {
	frames(animation_type)
		.map(|body| format!("@keyframes {}-{} {{\n{}}}\n", class_prefix, animation_type, body))
}
