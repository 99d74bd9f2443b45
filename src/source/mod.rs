pub mod traits;
pub mod supabase;

pub use supabase::SupabaseSource;
pub use traits::ProductSource;
