//! Short usage text
//!
//! clap renders `--help` on its own; this is the compact usage screen with a
//! worked example, for callers that want to show it explicitly.

/// Usage text for `program`.
pub fn help_text(program: &str) -> String {
    format!(
        "
    Usage:
        {program} -e EMAIL -k API_KEY -f FILE_PATH

    Arguments:
        -e, --email       Your email for API authentication
        -k, --api_key     Your Dehashed API Key
        -f, --file        Path to the text file containing a list of emails/usernames to query

    Example:
        {program} -e youremail@example.com -k yourapikey -f queries.txt
    "
    )
}

pub fn print_help(program: &str) {
    println!("{}", help_text(program));
}
