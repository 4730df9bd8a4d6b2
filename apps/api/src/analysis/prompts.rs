// Résumé analysis prompt template.
// `{resume_text}` is replaced verbatim with the extracted résumé text.

pub const RESUME_ANALYSIS_PROMPT: &str = "\
You are an expert HR recruiter and career analyst.
Read the following resume text and generate three well-structured sections:

1️⃣ Professional Summary – Concise overview (≤ 150 words) highlighting strengths, expertise, and value.
2️⃣ Key Skills – List 5-10 technical and soft skills in bullet form.
3️⃣ Experience Highlights – List 3-7 bullet points summarizing relevant work achievements or projects.

Maintain clear formatting with headings and bullet points.
Resume Text:
{resume_text}
";
