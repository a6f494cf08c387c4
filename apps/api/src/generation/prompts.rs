// Resume prompt templates. Placeholders are `{name}` style and are filled in a
// single pass by `composer::build_prompt`, so inserted text is never rescanned.
// Every placeholder appears in both templates except `{job_description}`.

/// General-purpose resume from the profile alone.
pub const BASIC_RESUME_PROMPT: &str = r#"Generate a professional, ATS-friendly resume with the following information:

Name: {name}
Email: {email}
Phone: {phone}

Skills: {skills}

Education:
- Graduation: {graduation_degree} from {graduation_institute} ({graduation_year})
- 12th: {twelfth_board} ({twelfth_year})
- 10th: {tenth_board} ({tenth_year})

Projects: {projects}

Experience: {experience}

Please format the resume with clear sections (Education, Skills, Projects, Experience)
using bullet points where appropriate. Make it concise but comprehensive."#;

/// Resume tailored to one job description.
pub const TARGETED_RESUME_PROMPT: &str = r#"Generate a targeted, ATS-friendly resume tailored for the following job description:

JOB DESCRIPTION:
{job_description}

CANDIDATE INFORMATION:
Name: {name}
Email: {email}
Phone: {phone}

Skills: {skills}

Education:
- Graduation: {graduation_degree} from {graduation_institute} ({graduation_year})
- 12th: {twelfth_board} ({twelfth_year})
- 10th: {tenth_board} ({tenth_year})

Projects: {projects}

Experience: {experience}

Please create a resume that:
1. Highlights skills and experiences most relevant to the job description
2. Uses industry-specific keywords from the job posting
3. Formats with clear sections and bullet points
4. Is optimized for ATS systems"#;
