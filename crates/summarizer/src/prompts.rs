//! System prompt composition for transcript summarization.

/// Build the system prompt for a summarization request.
///
/// Each dimension appends one clause; unrecognized values fall back to
/// the generic clause for that dimension.
pub fn system_prompt(summary_type: &str, style: &str, tonality: &str) -> String {
    let mut prompt = String::from(
        "You are a medical assistant helping a doctor summarize patient transcripts. ",
    );

    match summary_type {
        "brief" => prompt.push_str(
            "Provide a very concise summary focusing on the most critical clinical information. ",
        ),
        "detailed" => prompt.push_str(
            "Provide a comprehensive summary including background, symptoms, diagnosis, and plan. ",
        ),
        "key_points" => prompt.push_str(
            "Extract the main topics and key information points from the transcript. ",
        ),
        "action_points" => prompt.push_str(
            "Extract all actionable items as a to-do list (e.g., follow-ups, prescriptions, tests). ",
        ),
        _ => prompt.push_str("Summarize the following transcript. "),
    }

    match style {
        "bullets" => prompt.push_str("Format the output using bullet points. "),
        "numbered" => prompt.push_str("Format the output as a numbered list. "),
        _ => prompt.push_str("Format the output as a cohesive paragraph. "),
    }

    match tonality {
        "casual" => prompt.push_str("Use a casual, friendly tone. "),
        "simplified" => {
            prompt.push_str("Use simple language suitable for a patient to understand. ")
        }
        _ => prompt.push_str("Use a professional and formal medical tone. "),
    }

    prompt.push_str("\n\nTranscript to process:\n");
    prompt
}
