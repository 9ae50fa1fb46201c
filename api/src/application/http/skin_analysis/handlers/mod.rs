pub mod analyze_skin;
