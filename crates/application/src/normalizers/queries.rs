use guardview_domain::QuestionType;

/// Case-insensitive check against the record types the query log can filter by.
pub fn is_valid_question_type(qtype: &str) -> bool {
    !qtype.is_empty() && qtype.parse::<QuestionType>().is_ok()
}
