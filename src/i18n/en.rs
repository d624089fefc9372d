//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<&'static str, &'static str> {
    let mut t = HashMap::new();

    // Navigation
    t.insert("nav.home", "Home");
    t.insert("nav.events", "Events");
    t.insert("nav.gallery", "Gallery");
    t.insert("nav.culture", "Culture");
    t.insert("nav.rsvp", "RSVP");

    // Hero Section
    t.insert("hero.sacred_union", "Sacred Union");
    t.insert("hero.blessed_wedding", "শুভ বিবাহ");
    t.insert("hero.couple_names", "Subhasree & Mrinmoy");
    t.insert("hero.couple_names_local", "শুভশ্রী ও মৃন্ময়");
    t.insert("hero.wedding_date", "March 09, 2026");
    t.insert("hero.venue", "Shanai Bhavan, Siliguri");
    t.insert("hero.countdown_title", "Days Until Our Sacred Union");
    t.insert("hero.countdown.days", "Days");
    t.insert("hero.countdown.hours", "Hours");
    t.insert("hero.countdown.minutes", "Minutes");
    t.insert("hero.countdown.seconds", "Seconds");
    t.insert("hero.rsvp_button", "RSVP Now");
    t.insert("hero.join_celebration", "Join us in celebrating our sacred union with Bengali traditions and blessings");
    t.insert("hero.blessing", "শুভস্য শীঘ্রম্ — শুভ বিবাহ");
    t.insert("hero.blessing_translation", "May this sacred union be blessed and prosperous");

    // Events Section
    t.insert("events.title", "Wedding Events");
    t.insert("events.title_local", "বিবাহের অনুষ্ঠানসমূহ");
    t.insert("events.description", "Join us in celebrating a traditional Bengali wedding with authentic rituals, cultural ceremonies, and joyous festivities spanning multiple days. Each event holds deep cultural significance and represents centuries of Bengali traditions.");
    t.insert("events.cultural_significance", "Cultural Significance");
    t.insert("events.traditional_rituals", "Traditional Rituals");
    t.insert("events.dress_code", "Dress Code");
    t.insert("events.guest_info_title", "Important Information for Guests");
    t.insert("events.cultural_etiquette", "Cultural Etiquette");
    t.insert("events.practical_details", "Practical Details");
    t.insert("events.celebrate_with_us", "Celebrate With Us");
    t.insert("events.etiquette_1", "Please remove shoes before entering ceremonial areas");
    t.insert("events.etiquette_2", "Modest dress is appreciated for religious ceremonies");
    t.insert("events.etiquette_3", "Photography may be restricted during sacred rituals");
    t.insert("events.etiquette_4", "Touching elders' feet is a sign of respect");
    t.insert("events.etiquette_5", "Wait for the couple's blessing before taking gifts");
    t.insert("events.practical_1", "Parking will be available at all venues");
    t.insert("events.practical_2", "Vegetarian and non-vegetarian meals will be served");
    t.insert("events.practical_3", "Special arrangements for elderly guests");
    t.insert("events.practical_4", "Contact family for accommodation assistance");
    t.insert("events.practical_5", "Traditional Bengali sweets will be distributed");

    // Gallery Section
    t.insert("gallery.title", "Photo Gallery");
    t.insert("gallery.title_local", "ছবির গ্যালারি");
    t.insert("gallery.description", "Capturing precious moments from our journey together and the beautiful ceremonies that mark our sacred union in Bengali traditions.");
    t.insert("gallery.all_photos", "All Photos");
    t.insert("gallery.all_photos_local", "সব ছবি");
    t.insert("gallery.mehendi", "Mehendi");
    t.insert("gallery.mehendi_local", "মেহেন্দি");
    t.insert("gallery.gaye_holud", "Gaye Holud");
    t.insert("gallery.gaye_holud_local", "গায়ে হলুদ");
    t.insert("gallery.ceremony", "Ceremony");
    t.insert("gallery.ceremony_local", "বিয়ে");
    t.insert("gallery.reception", "Reception");
    t.insert("gallery.reception_local", "রিসেপশন");
    t.insert("gallery.pre_wedding", "Pre-Wedding");
    t.insert("gallery.pre_wedding_local", "প্রি-ওয়েডিং");

    // Culture Section
    t.insert("culture.title", "Bengali Wedding Culture");
    t.insert("culture.title_local", "বাঙালি বিবাহের সংস্কৃতি");
    t.insert("culture.description", "Explore the rich traditions, customs, and cultural significance of Bengali weddings that have been passed down through generations, representing the sacred bond of marriage.");
    t.insert("culture.key_traditions", "Key Traditions");
    t.insert("culture.blessings_title", "Traditional Bengali Wedding Blessings");
    t.insert("culture.bride_blessing", "For the Bride (কন্যার জন্য)");
    t.insert("culture.bride_blessing_text", "সুবহগা হও, পুত্রবতী হও, আয়ুষ্মতী হও");
    t.insert("culture.bride_blessing_translation", "May you be blessed with good fortune, children, and long life");
    t.insert("culture.couple_blessing", "For the Couple (দম্পতির জন্য)");
    t.insert("culture.couple_blessing_text", "শুভ বিবাহ, শুভ জীবন, সুখী দাম্পত্য");
    t.insert("culture.couple_blessing_translation", "Blessed wedding, blessed life, happy married life");

    // RSVP Section
    t.insert("rsvp.title", "RSVP");
    t.insert("rsvp.title_local", "উপস্থিতি নিশ্চিত করুন");
    t.insert("rsvp.description", "We would be honored by your presence at our wedding celebration. Please let us know if you'll be joining us for this sacred occasion.");
    t.insert("rsvp.full_name", "Full Name");
    t.insert("rsvp.email", "Email Address");
    t.insert("rsvp.phone", "Phone Number");
    t.insert("rsvp.guest_count", "Number of Guests");
    t.insert("rsvp.event_selection", "Which event will you attend?");
    t.insert("rsvp.select_event", "Select an event");
    t.insert("rsvp.attending_question", "Will you be attending?");
    t.insert("rsvp.yes_attending", "Yes, I'll be there");
    t.insert("rsvp.no_attending", "Sorry, can't make it");
    t.insert("rsvp.dietary_restrictions", "Dietary Restrictions or Allergies");
    t.insert("rsvp.dietary_placeholder", "Please let us know about any dietary requirements");
    t.insert("rsvp.message", "Special Message or Wishes");
    t.insert("rsvp.message_placeholder", "Share your blessings, wishes, or any special message for the couple");
    t.insert("rsvp.submit", "Send RSVP");
    t.insert("rsvp.submitting", "Submitting...");
    t.insert("rsvp.success_title", "Thank You for Your RSVP!");
    t.insert("rsvp.success_subtitle", "আপনার উপস্থিতির জন্য ধন্যবাদ");
    t.insert("rsvp.success_message", "We're delighted that you'll be joining us for our special celebration. You'll receive a confirmation email shortly with all the details.");

    // Calendar Integration
    t.insert("calendar.add_to_calendar", "Add to Calendar");
    t.insert("calendar.never_miss_event", "Never miss this special moment");
    t.insert("calendar.add_to_google", "Add to Google Calendar");
    t.insert("calendar.add_to_outlook", "Add to Outlook");
    t.insert("calendar.download_ics", "Download Calendar File");
    t.insert("calendar.choose_calendar", "Choose your calendar app:");
    t.insert("calendar.download_file", "Or download calendar file:");
    t.insert("calendar.ics_description", "Compatible with Apple Calendar, Outlook, and other calendar apps");
    t.insert("calendar.reminder_included", "Reminder included!");
    t.insert("calendar.reminder_description", "You'll get a notification 1 hour before the event starts.");

    // Footer
    t.insert("footer.brand", "Sacred Union");
    t.insert("footer.tagline", "Celebrating the eternal bond of love with Bengali traditions and cultural heritage.");
    t.insert("footer.blessing_footer", "তারপর পথ হারালো তোমায় আমায় নিয়ে");
    t.insert("footer.quick_links", "Quick Links");
    t.insert("footer.contact_families", "Contact Families");
    t.insert("footer.wedding_timeline", "Wedding Timeline");
    t.insert("footer.copyright", "© 2026 Subhasree & Mrinmoy Wedding. Made with love and Bengali traditions.");
    t.insert("footer.quote", "তারপর পথ হারালো তোমায় আমায় নিয়ে");
    t.insert("footer.quote_translation", "Then the path was lost, taking you and me");

    // Common
    t.insert("common.required", "required");
    t.insert("common.optional", "optional");
    t.insert("common.loading", "Loading...");
    t.insert("common.error", "Error");
    t.insert("common.success", "Success");

    // Theme
    t.insert("theme.title", "Theme");
    t.insert("theme.light", "Light");
    t.insert("theme.dark", "Dark");
    t.insert("theme.auto", "Auto (follows daylight in India)");

    // Language
    t.insert("language.title", "Language");
    t.insert("language.changed", "Language changed");

    // Countdown state
    t.insert("hero.countdown.complete", "The celebration has begun!");

    // RSVP validation
    t.insert("rsvp.error.name_required", "Name is required");
    t.insert("rsvp.error.email_required", "Email is required");
    t.insert("rsvp.error.email_invalid", "Email is invalid");
    t.insert("rsvp.error.phone_required", "Phone number is required");
    t.insert("rsvp.error.event_required", "Please select an event");
    t.insert("rsvp.error.guest_count_range", "Guest count must be between 1 and 10");

    t
}
