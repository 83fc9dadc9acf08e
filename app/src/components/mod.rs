pub mod filter_panel;
pub mod force_graph;
pub mod paper_card;
pub mod search_bar;
