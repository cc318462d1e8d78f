// Adapters layer: concrete implementations of the domain ports (hosted store, chat providers).

pub mod chat_completion;
pub mod memory;
pub mod supabase;

pub use chat_completion::ChatCompletionClient;
pub use memory::InMemoryStore;
pub use supabase::SupabaseStore;
