/// Builds one suggestion per missing skill, in input order.
pub fn generate(missing_skills: &[String]) -> Vec<String> {
    missing_skills
        .iter()
        .map(|skill| format!("Consider gaining experience with {skill} to match this requirement."))
        .collect()
}
