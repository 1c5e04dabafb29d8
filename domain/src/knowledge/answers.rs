//! Canned answers served by the knowledge base.

pub const LICENSING: &str = "For driver's license services, you can:
• Renew your license online through your state's DMV website
• Apply for a new license at your local DMV office
• Required documents typically include proof of identity, residency, and Social Security
• Most renewals can be completed online if you meet eligibility requirements
• Check your state's specific requirements as they may vary";

pub const VOTING: &str = "For voting information:
• Register to vote through your state's election website or local election office
• Check your voter registration status online
• Find your polling location using your state's voter portal
• Request absentee or mail-in ballots if available in your state
• Early voting options vary by state - check local requirements
• Bring valid ID to vote (requirements vary by state)";

pub const TAXES: &str = "For tax-related services:
• File federal taxes through IRS.gov or approved tax software
• State tax filing requirements vary - check your state's revenue website
• Get tax transcripts and forms from IRS.gov
• Set up payment plans for tax debt through IRS online services
• Free tax preparation assistance available through VITA programs
• Tax deadline is typically April 15th (unless extended)";

pub const BENEFITS: &str = "For government benefits:
• Apply for Social Security benefits at ssa.gov
• Medicare enrollment typically begins 3 months before turning 65
• SNAP (food assistance) applications through your state's social services
• Unemployment benefits through your state's labor department
• Medicaid applications through your state's health department
• Veterans benefits through va.gov
• Check eligibility requirements for each program";

pub const PASSPORT: &str = "For passport and travel services:
• Apply for passports at passport acceptance facilities or by mail
• Passport cards available for land/sea travel to Canada, Mexico, Caribbean
• Expedited processing available for additional fees
• Required documents include citizenship proof and photo ID
• Passport photos must meet specific requirements
• Check current processing times on travel.state.gov";

pub const LEGAL: &str = "For legal assistance:
• Find legal aid services through your state's bar association
• Small claims court for disputes under state-specific dollar limits
• Public defender services for criminal cases if you qualify
• Legal self-help resources available through court websites
• Mediation services often available for civil disputes
• Contact your local courthouse for specific procedures";

pub const OVERVIEW: &str = "I'm here to help with government services! I can provide information about:
• Driver's licenses and permits
• Voting and elections
• Tax filing and payments
• Government benefits (Social Security, Medicare, SNAP, etc.)
• Passport and travel documents
• Legal services and court procedures
• Business licenses and permits

Please ask me about any specific government service you need help with, and I'll provide detailed guidance.";
