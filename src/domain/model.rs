// ドメインモデル（集約と値オブジェクト）

mod value_objects;
mod ticket_purchase;

pub use value_objects::{
    AccountId,
    Money,
    TicketPolicy,
    TicketType,
    TicketTypeRequest,
};

pub use ticket_purchase::TicketPurchase;
