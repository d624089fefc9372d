//! Marathi translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<&'static str, &'static str> {
    let mut t = HashMap::new();

    // Navigation
    t.insert("nav.home", "मुख्यपृष्ठ");
    t.insert("nav.events", "कार्यक्रम");
    t.insert("nav.gallery", "गॅलरी");
    t.insert("nav.culture", "संस्कृती");
    t.insert("nav.rsvp", "उपस्थिती");

    // Hero Section
    t.insert("hero.sacred_union", "शुभमंगल");
    t.insert("hero.blessed_wedding", "शुभ विवाह");
    t.insert("hero.couple_names", "शुभश्री आणि मृन्मय");
    t.insert("hero.couple_names_local", "शुभश्री आणि मृन्मय");
    t.insert("hero.wedding_date", "९ मार्च, २०२६");
    t.insert("hero.venue", "शहनाई भवन, सिलीगुडी");
    t.insert("hero.countdown_title", "आमच्या शुभ विवाहापर्यंत दिवस");
    t.insert("hero.countdown.days", "दिवस");
    t.insert("hero.countdown.hours", "तास");
    t.insert("hero.countdown.minutes", "मिनिटे");
    t.insert("hero.countdown.seconds", "सेकंद");
    t.insert("hero.rsvp_button", "उपस्थिती कळवा");
    t.insert("hero.join_celebration", "बंगाली परंपरा आणि आशीर्वादांसह आमच्या शुभ विवाहाचा उत्सव साजरा करण्यासाठी आमच्यात सामील व्हा");
    t.insert("hero.blessing", "शुभस्य शीघ्रम् — शुभ विवाह");
    t.insert("hero.blessing_translation", "हे पवित्र मिलन मंगलमय आणि समृद्ध होवो");

    // Events Section
    t.insert("events.title", "विवाह कार्यक्रम");
    t.insert("events.title_local", "लग्नसोहळा");
    t.insert("events.description", "पारंपारिक विधी, सांस्कृतिक समारंभ आणि अनेक दिवसांच्या आनंदी उत्सवांसह बंगाली विवाहाचा उत्सव साजरा करण्यासाठी आमच्यात सामील व्हा. प्रत्येक कार्यक्रमाचे खोल सांस्कृतिक महत्त्व आहे आणि शतकानुशतकांच्या बंगाली परंपरांचे प्रतिनिधित्व करते.");
    t.insert("events.cultural_significance", "सांस्कृतिक महत्त्व");
    t.insert("events.traditional_rituals", "पारंपारिक विधी");
    t.insert("events.dress_code", "पोशाख संहिता");
    t.insert("events.guest_info_title", "पाहुण्यांसाठी महत्त्वाची माहिती");
    t.insert("events.cultural_etiquette", "सांस्कृतिक शिष्टाचार");
    t.insert("events.practical_details", "व्यावहारिक तपशील");
    t.insert("events.celebrate_with_us", "आमच्यासोबत उत्सव साजरा करा");
    t.insert("events.etiquette_1", "कृपया समारंभ स्थळात प्रवेश करण्यापूर्वी चपला काढा");
    t.insert("events.etiquette_2", "धार्मिक समारंभांसाठी शालीन पोशाख अपेक्षित");
    t.insert("events.etiquette_3", "पवित्र विधींदरम्यान फोटोग्राफी प्रतिबंधित असू शकते");
    t.insert("events.etiquette_4", "वडीलधाऱ्यांच्या पाया पडणे हा आदराचा प्रतीक आहे");
    t.insert("events.etiquette_5", "भेटवस्तू देण्यापूर्वी जोडप्याच्या आशीर्वादाची प्रतीक्षा करा");
    t.insert("events.practical_1", "सर्व ठिकाणी पार्किंगची व्यवस्था असेल");
    t.insert("events.practical_2", "शाकाहारी आणि मांसाहारी दोन्ही जेवणाची व्यवस्था असेल");
    t.insert("events.practical_3", "वयोवृद्ध पाहुण्यांसाठी विशेष व्यवस्था");
    t.insert("events.practical_4", "निवासाच्या व्यवस्थेसाठी कुटुंबाशी संपर्क साधा");
    t.insert("events.practical_5", "पारंपारिक बंगाली मिठाईचे वाटप केले जाईल");

    // Gallery Section
    t.insert("gallery.title", "फोटो गॅलरी");
    t.insert("gallery.title_local", "फोटो गॅलरी");
    t.insert("gallery.description", "बंगाली परंपरांमध्ये आमच्या शुभ मिलनाचे सुंदर समारंभ आणि एकत्र प्रवासातील स्मरणीय क्षणांचा संग्रह.");
    t.insert("gallery.all_photos", "सर्व फोटो");
    t.insert("gallery.all_photos_local", "सर्व फोटो");
    t.insert("gallery.mehendi", "मेहंदी");
    t.insert("gallery.mehendi_local", "मेहंदी");
    t.insert("gallery.gaye_holud", "गाये होलुद");
    t.insert("gallery.gaye_holud_local", "गाये होलुद");
    t.insert("gallery.ceremony", "विवाह");
    t.insert("gallery.ceremony_local", "विवाह");
    t.insert("gallery.reception", "स्वागत समारंभ");
    t.insert("gallery.reception_local", "स्वागत समारंभ");
    t.insert("gallery.pre_wedding", "विवाहपूर्व");
    t.insert("gallery.pre_wedding_local", "विवाहपूर्व");

    // Culture Section
    t.insert("culture.title", "बंगाली विवाह संस्कृती");
    t.insert("culture.title_local", "बंगाली विवाह संस्कृती");
    t.insert("culture.description", "पिढ्यानपिढ्या चालत आलेल्या बंगाली विवाहांच्या समृद्ध परंपरा, रीतिरिवाज आणि सांस्कृतिक महत्त्वाचा शोध घ्या, जे विवाहाच्या पवित्र बंधनाचे प्रतिनिधित्व करतात.");
    t.insert("culture.key_traditions", "मुख्य परंपरा");
    t.insert("culture.blessings_title", "पारंपारिक बंगाली विवाह आशीर्वाद");
    t.insert("culture.bride_blessing", "वधूसाठी");
    t.insert("culture.bride_blessing_text", "सुभगा हो, पुत्रवती हो, आयुष्मती हो");
    t.insert("culture.bride_blessing_translation", "तुम्हाला सौभाग्य, संतती आणि दीर्घायुष्याचा आशीर्वाद मिळो");
    t.insert("culture.couple_blessing", "जोडप्यासाठी");
    t.insert("culture.couple_blessing_text", "शुभ विवाह, शुभ जीवन, सुखी दाम्पत्य");
    t.insert("culture.couple_blessing_translation", "मंगलमय विवाह, मंगलमय जीवन, आनंदी वैवाहिक जीवन");

    // RSVP Section
    t.insert("rsvp.title", "उपस्थिती कळवा");
    t.insert("rsvp.title_local", "उपस्थिती कळवा");
    t.insert("rsvp.description", "आमच्या विवाह उत्सवात तुमच्या उपस्थितीने आम्हाला सन्मान वाटेल. या शुभ प्रसंगी तुम्ही आमच्यात सामील व्हाल का ते कृपया कळवा.");
    t.insert("rsvp.full_name", "पूर्ण नाव");
    t.insert("rsvp.email", "ईमेल पत्ता");
    t.insert("rsvp.phone", "फोन नंबर");
    t.insert("rsvp.guest_count", "पाहुण्यांची संख्या");
    t.insert("rsvp.event_selection", "तुम्ही कोणत्या कार्यक्रमाला उपस्थित राहाल?");
    t.insert("rsvp.select_event", "एक कार्यक्रम निवडा");
    t.insert("rsvp.attending_question", "तुम्ही उपस्थित राहाल का?");
    t.insert("rsvp.yes_attending", "होय, मी येईन");
    t.insert("rsvp.no_attending", "माफ करा, येऊ शकत नाही");
    t.insert("rsvp.dietary_restrictions", "आहारातील निर्बंध किंवा ऍलर्जी");
    t.insert("rsvp.dietary_placeholder", "कृपया कोणत्याही आहारातील गरजांबद्दल कळवा");
    t.insert("rsvp.message", "विशेष संदेश किंवा शुभेच्छा");
    t.insert("rsvp.message_placeholder", "जोडप्यासाठी तुमचे आशीर्वाद, शुभेच्छा किंवा कोणताही विशेष संदेश शेअर करा");
    t.insert("rsvp.submit", "उपस्थिती कळवा");
    t.insert("rsvp.submitting", "पाठवत आहे...");
    t.insert("rsvp.success_title", "तुमच्या उपस्थितीसाठी धन्यवाद!");
    t.insert("rsvp.success_subtitle", "तुमच्या उपस्थितीसाठी धन्यवाद");
    t.insert("rsvp.success_message", "आमच्या विशेष उत्सवात तुम्ही सामील व्हाल हे जाणून आम्हाला आनंद झाला. तुम्हाला लवकरच सर्व तपशीलांसह पुष्टीकरण ईमेल मिळेल.");

    // Calendar Integration
    t.insert("calendar.add_to_calendar", "कॅलेंडरमध्ये जोडा");
    t.insert("calendar.never_miss_event", "हा विशेष क्षण चुकवू नका");
    t.insert("calendar.add_to_google", "गूगल कॅलेंडरमध्ये जोडा");
    t.insert("calendar.add_to_outlook", "आउटलुकमध्ये जोडा");
    t.insert("calendar.download_ics", "कॅलेंडर फाइल डाउनलोड करा");
    t.insert("calendar.choose_calendar", "तुमचे कॅलेंडर अॅप निवडा:");
    t.insert("calendar.download_file", "किंवा कॅलेंडर फाइल डाउनलोड करा:");
    t.insert("calendar.ics_description", "अॅपल कॅलेंडर, आउटलुक आणि इतर कॅलेंडर अॅप्ससह सुसंगत");
    t.insert("calendar.reminder_included", "रिमाइंडर समाविष्ट!");
    t.insert("calendar.reminder_description", "कार्यक्रम सुरू होण्याच्या १ तास आधी तुम्हाला सूचना मिळेल.");

    // Footer
    t.insert("footer.brand", "शुभमंगल");
    t.insert("footer.tagline", "बंगाली परंपरा आणि सांस्कृतिक वारशासह प्रेमाच्या शाश्वत बंधनाचा उत्सव.");
    t.insert("footer.blessing_footer", "तारपर पथ हारालो तोमाय आमाय निये");
    t.insert("footer.quick_links", "महत्त्वाचे दुवे");
    t.insert("footer.contact_families", "कुटुंबांशी संपर्क");
    t.insert("footer.wedding_timeline", "विवाह वेळापत्रक");
    t.insert("footer.copyright", "© २०२६ शुभश्री आणि मृन्मय विवाह. प्रेम आणि बंगाली परंपरांनी बनवले.");
    t.insert("footer.quote", "तारपर पथ हारालो तोमाय आमाय निये");
    t.insert("footer.quote_translation", "मग वाट हरवली, तुला आणि मला घेऊन");

    // Common
    t.insert("common.required", "आवश्यक");
    t.insert("common.optional", "ऐच्छिक");
    t.insert("common.loading", "लोड होत आहे...");
    t.insert("common.error", "त्रुटी");
    t.insert("common.success", "यशस्वी");

    // Theme
    t.insert("theme.title", "थीम");
    t.insert("theme.light", "फिकट");
    t.insert("theme.dark", "गडद");
    t.insert("theme.auto", "स्वयंचलित (भारतातील दिवसाच्या प्रकाशानुसार)");

    // Language
    t.insert("language.title", "भाषा");
    t.insert("language.changed", "भाषा बदलली");

    // Countdown state
    t.insert("hero.countdown.complete", "उत्सव सुरू झाला आहे!");

    // RSVP validation
    t.insert("rsvp.error.name_required", "नाव आवश्यक आहे");
    t.insert("rsvp.error.email_required", "ईमेल आवश्यक आहे");
    t.insert("rsvp.error.email_invalid", "ईमेल अवैध आहे");
    t.insert("rsvp.error.phone_required", "फोन नंबर आवश्यक आहे");
    t.insert("rsvp.error.event_required", "कृपया एक कार्यक्रम निवडा");
    t.insert("rsvp.error.guest_count_range", "पाहुण्यांची संख्या १ ते १० दरम्यान असावी");

    t
}
