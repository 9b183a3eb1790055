//! Node id generation

use uuid::Uuid;

/// Source of fresh node ids
pub trait IdGenerator {
	/// Produce an id for a node whose kind maps to `prefix`
	fn generate(&mut self, prefix: &str) -> String;
}

/// `<prefix>_<16 hex>` ids backed by UUID v4
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
	fn generate(&mut self, prefix: &str) -> String {
		let hex = Uuid::new_v4().simple().to_string();
		format!("{}_{}", prefix, &hex[..16])
	}
}

/// Deterministic `<prefix>_<n>` ids, counting from 1 across all prefixes
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
	next: u64,
}

impl SequentialIds {
	/// Create a generator starting at 1
	pub fn new() -> Self {
		Self::default()
	}
}

impl IdGenerator for SequentialIds {
	fn generate(&mut self, prefix: &str) -> String {
		self.next += 1;
		format!("{}_{}", prefix, self.next)
	}
}
