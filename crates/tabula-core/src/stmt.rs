mod record;
pub use record::Record;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
